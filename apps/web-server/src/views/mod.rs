//! Server-rendered HTML pages.
//!
//! All pages are built with [maud](https://maud.lambda.xyz/) for
//! compile-time HTML generation; dynamic values are escaped automatically.
//! `layout` provides the shared chrome (navigation, notice banner), and the
//! per-resource modules build the page bodies.

pub mod home;
pub mod posts;
pub mod users;

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::flash::Notice;

/// Inline CSS shared by every page.
const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#fafafa;--fg:#111;--fg2:#555;--fg3:#999;--accent:#0b6e4f;--accent-hover:#09553d;--surface:#fff;--border:rgba(11,110,79,.18)}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column;align-items:center;padding:1.5rem 1rem}
main{max-width:680px;width:100%;flex:1}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}
h1{font-size:1.6rem;letter-spacing:-.02em;margin-bottom:1rem}
h2{font-size:1.15rem;margin:1.5rem 0 .75rem}

nav{display:flex;gap:1rem;max-width:680px;width:100%;padding-bottom:1rem;margin-bottom:1.5rem;border-bottom:1px solid var(--border)}
nav a{font-weight:600}

.notice{max-width:680px;width:100%;padding:.6rem .9rem;border-radius:8px;margin-bottom:1rem;font-size:.95rem}
.notice-success{background:#e4f5ec;color:#0b6e4f}
.notice-error{background:#fdecec;color:#a82626}
.notice-info{background:#eaf1fb;color:#28518f}

.card{padding:1rem 1.25rem;border:1px solid var(--border);border-radius:10px;background:var(--surface);margin-bottom:.75rem}
.card-title{font-weight:600;font-size:1.05rem}
.card-meta{color:var(--fg3);font-size:.85rem;margin-top:.15rem}
.card-body{margin-top:.5rem;white-space:pre-wrap;word-break:break-word;color:var(--fg2)}

.stats{display:flex;gap:.75rem;flex-wrap:wrap}
.stat{flex:1;min-width:140px;padding:1.25rem;border:1px solid var(--border);border-radius:10px;background:var(--surface);text-align:center}
.stat-value{font-size:2rem;font-weight:700}
.stat-label{color:var(--fg3);font-size:.85rem;text-transform:uppercase;letter-spacing:.05em}

form.stacked{display:flex;flex-direction:column;gap:.75rem;max-width:420px}
form.stacked label{font-weight:600;font-size:.9rem}
form.stacked input[type=text],form.stacked textarea,form.stacked select{width:100%;padding:.5rem .65rem;border:1px solid var(--border);border-radius:8px;font:inherit;background:var(--surface)}
form.stacked textarea{min-height:140px;resize:vertical}
button{padding:.5rem 1rem;border:none;border-radius:8px;background:var(--accent);color:#fff;font:inherit;font-weight:600;cursor:pointer}
button:hover{background:var(--accent-hover)}
button.danger{background:#a82626}
form.inline{display:inline}

ul.plain{list-style:none}
ul.plain li{display:flex;align-items:center;justify-content:space-between;padding:.5rem 0;border-bottom:1px solid var(--border)}

.empty{color:var(--fg3);padding:1rem 0}
.actions{display:flex;gap:.5rem;align-items:center;margin-top:.75rem}
footer{color:var(--fg3);font-size:.85rem;margin-top:2rem}
"#;

/// Shared page chrome: navigation, the one-shot notice banner, the body.
pub fn layout(title: &str, notice: Option<Notice>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " · Quill" }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                nav {
                    a href="/" { "Home" }
                    a href="/posts" { "Posts" }
                    a href="/users" { "Users" }
                    a href="/analytics" { "Analytics" }
                }
                @if let Some(notice) = notice {
                    div class={ "notice notice-" (notice.level.css_class()) } {
                        (notice.message)
                    }
                }
                main { (content) }
                footer { "Quill, a minimal blog" }
            }
        }
    }
}

/// The 404 page.
pub fn not_found_page() -> Markup {
    layout(
        "Not found",
        None,
        html! {
            h1 { "Page not found" }
            p { "The page you were looking for does not exist." }
            p { a href="/" { "Back to the home page" } }
        },
    )
}

/// Generic 500 page for storage-layer failures.
pub fn server_error_page() -> Markup {
    layout(
        "Server error",
        None,
        html! {
            h1 { "Something went wrong" }
            p { "An internal error occurred. Please try again." }
            p { a href="/" { "Back to the home page" } }
        },
    )
}
