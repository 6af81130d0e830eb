use crossbeam_channel::{select, Receiver};
use tvshows_core::remote::Response;

use crate::{
    cmd::{Command, HELP},
    router::Router,
    ui::{FormEvent, Key, UiEvent},
    widget::SharedOutput,
};

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// The UI loop.  Input lines and remote responses are handled one at a time
/// on the calling thread.
pub struct Delegate {
    router: Router,
    lines: Receiver<String>,
    responses: Receiver<Response>,
    out: SharedOutput,
}

impl Delegate {
    pub fn new(
        router: Router,
        lines: Receiver<String>,
        responses: Receiver<Response>,
        out: SharedOutput,
    ) -> Self {
        Self {
            router,
            lines,
            responses,
            out,
        }
    }

    pub fn run(mut self) {
        loop {
            select! {
                recv(self.lines) -> line => match line {
                    Ok(line) => {
                        if self.command(Command::parse(&line)) == Flow::Quit {
                            break;
                        }
                    }
                    Err(_) => {
                        log::info!("input closed");
                        break;
                    }
                },
                recv(self.responses) -> response => match response {
                    Ok(response) => {
                        let home = self.router.home();
                        home.handle(response);
                        log::debug!(
                            "{} shows, {} rows",
                            home.shows().len(),
                            home.show_list().len()
                        );
                    }
                    Err(_) => {
                        log::error!("remote worker stopped");
                        break;
                    }
                },
            }
        }
    }

    fn command(&mut self, command: Command) -> Flow {
        match command {
            Command::Submit(title) => {
                let home = self.router.home();
                home.event(UiEvent::Form(FormEvent::Input(title)));
                home.event(UiEvent::Form(FormEvent::KeyPress(Key::Enter)));
            }
            Command::Type(title) => {
                self.router
                    .home()
                    .event(UiEvent::Form(FormEvent::Input(title)));
            }
            Command::Add => self.router.home().event(UiEvent::Form(FormEvent::Click)),
            Command::Delete(row) => self.router.home().event(UiEvent::Delete(row - 1)),
            Command::Refresh => self.router.home().event(UiEvent::Refresh),
            Command::Navigate(path) => {
                if self.router.navigate(&path).is_some() {
                    let title = self.router.current().title();
                    self.print(&format!("== {title} =="));
                }
            }
            Command::Help => self.print(HELP),
            Command::Quit => return Flow::Quit,
            Command::Unknown(line) => log::warn!("unknown command: {}", line),
        }
        Flow::Continue
    }

    fn print(&self, text: &str) {
        let mut out = self.out.lock();
        if let Err(err) = writeln!(out, "{text}") {
            log::error!("failed to write output: {}", err);
        }
    }
}
