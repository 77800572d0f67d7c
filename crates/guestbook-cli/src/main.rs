use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use tracing::info;

use guestbook_client::{
    ClientConfig, CommentListController, GateIntent, RenderOp, Surface,
};
use guestbook_types::PageFilter;

/// Terminal stand-in for the page markup: render ops print to stdout, the
/// max-results "form control" is a remembered value set by the `max`
/// command.
#[derive(Default)]
struct TermSurface {
    max_input: Mutex<Option<String>>,
}

impl TermSurface {
    fn set_max_input(&self, raw: &str) {
        *self.max_input.lock().unwrap() = Some(raw.to_string());
    }
}

impl Surface for TermSurface {
    fn apply(&self, ops: &[RenderOp]) {
        for op in ops {
            match op {
                RenderOp::ClearList => println!("----------------------------------------"),
                RenderOp::SetListLanguage(code) => println!("[list language: {code}]"),
                RenderOp::AppendItem(item) => {
                    let mood = item.mood_icon.unwrap_or("");
                    println!("#{} {} {} ({})", item.id, mood, item.author, item.posted_at);
                    println!("   {}", item.content);
                    if let Some(url) = &item.image_url {
                        println!("   image: {url}");
                    }
                    if let Some(score) = item.sentiment {
                        println!("   sentiment: {score:+.1}");
                    }
                }
                RenderOp::SetFormVisible(visible) => {
                    println!("[post form {}]", if *visible { "shown" } else { "hidden" })
                }
                RenderOp::SetFormAction(url) => println!("[post form submits to {url}]"),
                RenderOp::ShowAttachmentControl => println!("[attachment control shown]"),
            }
        }
    }

    fn notify(&self, message: &str) {
        println!("!! {message}");
    }

    fn navigate(&self, url: &str) {
        println!(">> open {url} in your browser to continue");
    }

    fn max_results_input(&self) -> Option<String> {
        self.max_input.lock().unwrap().clone()
    }
}

const HELP: &str = "\
commands:
  refresh        reload the comment list
  next           fetch the next page
  max <n>        set max results and reload
  lang <code>    translate comments (e.g. lang fr)
  delete <id>    delete a comment (requires login)
  login          log in
  logout         log out
  attach         prepare an image upload
  quit";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "guestbook=info".into()),
        )
        .init();

    let config = ClientConfig::from_env()?;
    info!(base_url = %config.base_url, "starting guestbook client");

    let controller = CommentListController::new(&config, TermSurface::default())?;

    // Initial page load: ignore the error here, it was already surfaced.
    let _ = controller.refresh(PageFilter::default()).await;

    println!("{HELP}");
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("");
        let arg = parts.next();

        let result = match (command, arg) {
            ("refresh", _) => controller.refresh(PageFilter::default()).await,
            ("next", _) => controller.next_page().await,
            ("max", Some(raw)) => {
                controller.surface().set_max_input(raw);
                controller.refresh(PageFilter::default()).await
            }
            ("lang", Some(code)) => controller.set_translation_language(code).await,
            ("delete", Some(id)) => controller.delete_comment(id).await,
            ("login", _) => controller.check_login(GateIntent::Login).await.map(|_| ()),
            ("logout", _) => controller.check_login(GateIntent::Logout).await.map(|_| ()),
            ("attach", _) => controller.fetch_upload_target().await,
            ("quit", _) | ("exit", _) => break,
            ("", _) => Ok(()),
            _ => {
                println!("{HELP}");
                Ok(())
            }
        };

        // Failures were already surfaced through the terminal; log them
        // for anyone running with debug output on.
        if let Err(err) = result {
            tracing::debug!(%err, "command failed");
        }
    }

    Ok(())
}
