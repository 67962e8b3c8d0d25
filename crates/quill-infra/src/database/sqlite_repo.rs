//! SQLite repository implementations.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, NotSet, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

use quill_core::domain::{Comment, NewComment, NewPost, Post, User};
use quill_core::error::RepoError;
use quill_core::ports::{CommentRepository, PostRepository, UserRepository};

use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::sqlite_base::{SqliteBaseRepository, map_write_err};

/// SQLite user repository.
pub type SqliteUserRepository = SqliteBaseRepository<UserEntity>;

/// SQLite post repository.
pub type SqlitePostRepository = SqliteBaseRepository<PostEntity>;

/// SQLite comment repository.
pub type SqliteCommentRepository = SqliteBaseRepository<CommentEntity>;

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, username: &str) -> Result<User, RepoError> {
        tracing::debug!(username, "Creating user");

        let model = user::ActiveModel {
            id: NotSet,
            username: Set(username.to_string()),
        }
        .insert(&self.db)
        .await
        .map_err(map_write_err)?;

        Ok(model.into())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<User>, RepoError> {
        let result = UserEntity::find()
            .order_by_asc(user::Column::Username)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        UserEntity::find()
            .count(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))
    }
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let active: post::ActiveModel = new_post.into();
        let model = active.insert(&self.db).await.map_err(map_write_err)?;

        Ok(model.into())
    }

    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_desc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn delete_by_user(&self, user_id: i32) -> Result<u64, RepoError> {
        let result = PostEntity::delete_many()
            .filter(post::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.rows_affected)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        PostEntity::find()
            .count(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))
    }
}

#[async_trait]
impl CommentRepository for SqliteCommentRepository {
    async fn create(&self, new_comment: NewComment) -> Result<Comment, RepoError> {
        let active: comment::ActiveModel = new_comment.into();
        let model = active.insert(&self.db).await.map_err(map_write_err)?;

        Ok(model.into())
    }

    async fn find_by_post(&self, post_id: i32) -> Result<Vec<Comment>, RepoError> {
        let result = CommentEntity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .order_by_asc(comment::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn delete_by_post(&self, post_id: i32) -> Result<u64, RepoError> {
        let result = CommentEntity::delete_many()
            .filter(comment::Column::PostId.eq(post_id))
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.rows_affected)
    }

    async fn delete_by_user(&self, user_id: i32) -> Result<u64, RepoError> {
        let result = CommentEntity::delete_many()
            .filter(comment::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.rows_affected)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        CommentEntity::find()
            .count(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))
    }
}
