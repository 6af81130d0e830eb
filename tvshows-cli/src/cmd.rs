//! Console input.  A plain line is typed into the title input followed by
//! Enter; lines starting with `:` are commands.

pub const HELP: &str = "\
Type a show title and press Enter to add it.
  :type <title>   put text in the title input without submitting
  :add            press the add button
  :delete <n>     delete the show in row n (also :d)
  :refresh        load the list from the server again
  :go <route>     navigate (the only route is `home`)
  :help           show this help
  :quit           exit";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Submit(String),
    Type(String),
    Add,
    /// 1-based row number.
    Delete(usize),
    Refresh,
    Navigate(String),
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let Some(command) = line.strip_prefix(':') else {
            return Command::Submit(line.to_string());
        };
        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command.trim(), ""),
        };
        match (name, arg) {
            ("type", title) => Command::Type(title.to_string()),
            ("add", "") => Command::Add,
            ("delete" | "d", row) => match row.parse() {
                Ok(row) if row > 0 => Command::Delete(row),
                _ => Command::Unknown(line.to_string()),
            },
            ("refresh", "") => Command::Refresh,
            ("go", route) if !route.is_empty() => Command::Navigate(route.to_string()),
            ("help" | "h" | "?", "") => Command::Help,
            ("quit" | "q", "") => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        }
    }
}
