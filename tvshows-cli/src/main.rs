#![allow(clippy::new_without_default)]

mod cmd;
mod data;
mod delegate;
mod router;
mod ui;
mod widget;

use std::{
    env,
    io::{self, BufRead},
    process,
    sync::Arc,
    thread,
};

use crossbeam_channel::{unbounded, Receiver};
use env_logger::{Builder, Env};
use parking_lot::Mutex;
use tvshows_core::{remote::RemoteWorker, webapi::WebApi};

use crate::{
    data::Config,
    delegate::Delegate,
    router::{AppContext, Router},
    ui::Surface,
    widget::{LineConfirm, LineInput, SharedOutput, TerminalList},
};

const ENV_LOG: &str = "TVSHOWS_LOG";
const ENV_LOG_STYLE: &str = "TVSHOWS_LOG_STYLE";

fn main() {
    // Setup logging from the env variables, with defaults.
    Builder::from_env(
        Env::new()
            .filter_or(ENV_LOG, "info")
            .write_style(ENV_LOG_STYLE),
    )
    .init();

    // Load configuration, writing out the defaults on first run.
    let mut config = Config::load().unwrap_or_else(|| {
        let config = Config::default();
        if Config::config_path().is_some_and(|path| !path.exists()) {
            log::info!("writing default config");
            config.save();
        }
        config
    });
    if let Some(base_url) = env::args().nth(1) {
        config.base_url = base_url;
    }

    let webapi = match WebApi::new(&config.base_url, Config::proxy().as_deref()) {
        Ok(webapi) => webapi
            .with_credentials(config.credentials())
            .with_create_style(config.create_style),
        Err(err) => {
            log::error!("cannot use {:?} as the server: {}", config.base_url, err);
            process::exit(1);
        }
    };

    let (response_sender, responses) = unbounded();
    let worker = RemoteWorker::spawn_with_store(Arc::new(webapi), response_sender);
    let ctx = AppContext {
        config,
        requests: worker.sender(),
    };

    let out: SharedOutput = Arc::new(Mutex::new(io::stdout()));
    let lines = read_lines();
    let surface = Surface {
        input: Box::new(LineInput::default()),
        list: Box::new(TerminalList::new(out.clone())),
        confirm: Box::new(LineConfirm::new(lines.clone(), out.clone())),
    };
    let router = Router::new(&ctx, surface);
    drop(ctx);

    Delegate::new(router, lines, responses, out).run();

    // Let requests that are still in flight finish before exiting.
    worker.join();
}

fn read_lines() -> Receiver<String> {
    let (send, recv) = unbounded();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if send.send(line).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    log::error!("failed to read input: {}", err);
                    break;
                }
            }
        }
    });
    recv
}
