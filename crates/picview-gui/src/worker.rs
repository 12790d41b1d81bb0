use std::sync::mpsc;
use std::time::Instant;

use picview_core::controller::SelectionId;
use picview_core::loader::{self, ImageSource};

use crate::messages::{LoaderCommand, LoaderResult};

/// Spawn the loader thread. Returns the command sender.
pub fn spawn_loader(
    result_tx: mpsc::Sender<LoaderResult>,
    ctx: egui::Context,
) -> std::io::Result<mpsc::Sender<LoaderCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoaderCommand>();

    std::thread::Builder::new()
        .name("picview-loader".into())
        .spawn(move || {
            loader_loop(cmd_rx, result_tx, ctx);
        })?;

    Ok(cmd_tx)
}

pub(crate) fn send(tx: &mpsc::Sender<LoaderResult>, ctx: &egui::Context, result: LoaderResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

pub(crate) fn send_log(
    tx: &mpsc::Sender<LoaderResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        LoaderResult::Log {
            message: msg.into(),
        },
    );
}

fn loader_loop(
    cmd_rx: mpsc::Receiver<LoaderCommand>,
    tx: mpsc::Sender<LoaderResult>,
    ctx: egui::Context,
) {
    while let Ok(mut cmd) = cmd_rx.recv() {
        // Only the newest queued request matters; older ones were superseded
        // while the previous load was running.
        while let Ok(newer) = cmd_rx.try_recv() {
            let LoaderCommand::Load { selection, .. } = &cmd;
            tracing::debug!(%selection, "Skipping superseded load");
            cmd = newer;
        }

        match cmd {
            LoaderCommand::Load { selection, source } => {
                handle_load(selection, source, &tx, &ctx);
            }
        }
    }
}

fn handle_load(
    selection: SelectionId,
    source: ImageSource,
    tx: &mpsc::Sender<LoaderResult>,
    ctx: &egui::Context,
) {
    send_log(tx, ctx, format!("Loading {source}..."));
    let start = Instant::now();

    match loader::load(&source) {
        Ok(image) => send(
            tx,
            ctx,
            LoaderResult::Loaded {
                selection,
                source,
                image,
                elapsed: start.elapsed(),
            },
        ),
        Err(error) => send(tx, ctx, LoaderResult::Failed { selection, error }),
    }
}
