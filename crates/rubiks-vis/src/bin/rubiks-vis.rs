//! Rubiks Visualiser
//!
//! Terminal front end for the visualiser session. Reads one command per line
//! from stdin:
//!
//! ```text
//! F            press a move button (any single character)
//! queue FRUB   replace the playback queue
//! play         toggle playback
//! hover X Y    move the pointer to page pixel (X, Y)
//! orbit DX DY  drag the camera
//! zoom D       scroll
//! state        print the facelet codes
//! quit
//! ```
//!
//! Pass `--offline` to apply moves in-process instead of calling the service.

use rubiks_vis::{
    ClipboardSink, Command, HttpTransformClient, LocalTransformClient, MemoryClipboard, Session,
    TransformClient, VisConfig,
};
use std::env;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rubiks_vis=info,rubiks_service=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = VisConfig::from_env()?;
    let offline = env::args().skip(1).any(|arg| arg == "--offline");

    println!("Rubiks Visualiser");
    println!("=================");
    if offline {
        println!("Applying moves in-process");
        drive(Session::new(config, LocalTransformClient, MemoryClipboard::new())).await
    } else {
        println!("Transformation service: {}", config.service_url);
        let client = HttpTransformClient::new(&config.service_url);
        drive(Session::new(config, client, MemoryClipboard::new())).await
    }
}

async fn drive<C, K>(session: Session<C, K>) -> Result<(), Box<dyn std::error::Error>>
where
    C: TransformClient,
    K: ClipboardSink,
{
    let handle = session.handle();
    let task = tokio::spawn(session.run());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };
        match command {
            Command::Move(symbol) => handle.direct_move(symbol)?,
            Command::Queue(text) => handle.set_queue_text(text)?,
            Command::Play => handle.toggle_playback()?,
            Command::Hover { x, y } => handle.pointer_moved(x, y)?,
            Command::Orbit { dx, dy } => handle.orbit(dx, dy)?,
            Command::Zoom(delta) => handle.zoom(delta)?,
            Command::State => {
                let snapshot = handle.snapshot();
                println!("{:?}", snapshot.state.codes());
                println!(
                    "playback: {:?}, queued: {:?}, applied: {}, failed: {}",
                    snapshot.playback.state, snapshot.playback.queue, snapshot.applied, snapshot.failed
                );
                if let Some(tooltip) = snapshot.tooltip {
                    println!("tooltip: {} at ({:.0}, {:.0})", tooltip.text, tooltip.left, tooltip.top);
                }
            }
            Command::Quit => break,
        }
    }

    handle.shutdown()?;
    task.await?;
    Ok(())
}
