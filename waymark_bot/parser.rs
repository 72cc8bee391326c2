use waymark_types::errors::CommandError;
use waymark_types::location::NearbyOrigin;

/// A fully parsed command invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum BotCommand {
    ShowAll { by_me_only: bool },
    Show { id: i64 },
    NearMe { origin: NearbyOrigin },
    Add { x: f64, y: f64, z: f64, name: String },
    EditDescription { id: i64, description: String },
    EditName { id: i64, name: String },
    EditLocation { id: i64, x: f64, y: f64, z: f64 },
    EditScreenshot { id: i64 },
}

/// Parses a raw message. `None` means the message is not addressed to the
/// bot (no prefix) and should be ignored; a parse failure is an error the
/// central handler reports.
pub fn parse(prefix: &str, content: &str) -> Option<Result<BotCommand, CommandError>> {
    let body = content.trim().strip_prefix(prefix)?;
    Some(parse_body(body))
}

fn parse_body(body: &str) -> Result<BotCommand, CommandError> {
    let mut args = Args::new(body);
    let name = args.next_token("command")?;

    match name {
        "show-all" | "show_all" => Ok(BotCommand::ShowAll {
            by_me_only: args.bool_or("by_me_only", false)?,
        }),
        "show" | "see" => Ok(BotCommand::Show {
            id: args.int("id")?,
        }),
        // Two coordinates mean (x, z); three mean (x, y, z). The variant
        // is decided here once, nothing downstream re-reads positions.
        "near-me" | "near_me" => {
            let x = args.float("x")?;
            let second = args.float("y_or_z")?;
            let origin = match args.optional_float("z_or_y")? {
                Some(z) => NearbyOrigin::Spatial { x, y: second, z },
                None => NearbyOrigin::Planar { x, z: second },
            };
            Ok(BotCommand::NearMe { origin })
        }
        "add" => Ok(BotCommand::Add {
            x: args.float("x")?,
            y: args.float("y")?,
            z: args.float("z")?,
            name: args.rest("name")?,
        }),
        "edit-description" | "describe" => Ok(BotCommand::EditDescription {
            id: args.int("id")?,
            description: args.rest("description")?,
        }),
        "edit-name" | "name" => Ok(BotCommand::EditName {
            id: args.int("id")?,
            name: args.rest("name")?,
        }),
        "edit-location" | "locate" => Ok(BotCommand::EditLocation {
            id: args.int("id")?,
            x: args.float("x")?,
            y: args.float("y")?,
            z: args.float("z")?,
        }),
        "edit-screenshot" | "screenshot" => Ok(BotCommand::EditScreenshot {
            id: args.int("id")?,
        }),
        other => Err(CommandError::UnknownCommand(other.to_string())),
    }
}

/// Positional argument cursor over one message body. Tokens are
/// whitespace-separated; `rest` hands back the untouched tail so free-text
/// arguments keep their inner spacing.
struct Args<'a> {
    body: &'a str,
    tokens: Vec<(usize, &'a str)>,
    next: usize,
}

impl<'a> Args<'a> {
    fn new(body: &'a str) -> Self {
        let tokens = body
            .split_whitespace()
            .map(|tok| (tok.as_ptr() as usize - body.as_ptr() as usize, tok))
            .collect();
        Self {
            body,
            tokens,
            next: 0,
        }
    }

    fn next_token(&mut self, name: &'static str) -> Result<&'a str, CommandError> {
        match self.tokens.get(self.next) {
            Some((_, token)) => {
                self.next += 1;
                Ok(token)
            }
            None => Err(CommandError::MissingArgument(name)),
        }
    }

    fn int(&mut self, name: &'static str) -> Result<i64, CommandError> {
        let token = self.next_token(name)?;
        token.parse().map_err(|_| CommandError::InvalidArgument {
            name,
            value: token.to_string(),
        })
    }

    fn float(&mut self, name: &'static str) -> Result<f64, CommandError> {
        let token = self.next_token(name)?;
        token.parse().map_err(|_| CommandError::InvalidArgument {
            name,
            value: token.to_string(),
        })
    }

    fn optional_float(&mut self, name: &'static str) -> Result<Option<f64>, CommandError> {
        if self.next >= self.tokens.len() {
            return Ok(None);
        }
        self.float(name).map(Some)
    }

    fn bool_or(&mut self, name: &'static str, default: bool) -> Result<bool, CommandError> {
        if self.next >= self.tokens.len() {
            return Ok(default);
        }
        let token = self.next_token(name)?;
        match token.to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" => Ok(false),
            _ => Err(CommandError::InvalidArgument {
                name,
                value: token.to_string(),
            }),
        }
    }

    fn rest(&mut self, name: &'static str) -> Result<String, CommandError> {
        match self.tokens.get(self.next) {
            Some((start, _)) => {
                let tail = self.body[*start..].trim_end().to_string();
                self.next = self.tokens.len();
                Ok(tail)
            }
            None => Err(CommandError::MissingArgument(name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok(content: &str) -> BotCommand {
        parse("!", content).unwrap().unwrap()
    }

    #[test]
    fn test_messages_without_the_prefix_are_ignored() {
        assert!(parse("!", "hello everyone").is_none());
        assert!(parse("!", "show 1").is_none());
    }

    #[test]
    fn test_show_all_and_aliases() {
        assert_eq!(
            parse_ok("!show-all"),
            BotCommand::ShowAll { by_me_only: false }
        );
        assert_eq!(
            parse_ok("!show_all yes"),
            BotCommand::ShowAll { by_me_only: true }
        );
    }

    #[test]
    fn test_show_takes_an_integer_id() {
        assert_eq!(parse_ok("!show 12"), BotCommand::Show { id: 12 });
        assert_eq!(parse_ok("!see 12"), BotCommand::Show { id: 12 });

        let err = parse("!", "!show twelve").unwrap().unwrap_err();
        assert_eq!(
            err,
            CommandError::InvalidArgument {
                name: "id",
                value: "twelve".to_string()
            }
        );
    }

    #[test]
    fn test_near_me_two_args_is_planar() {
        assert_eq!(
            parse_ok("!near-me 10 -20"),
            BotCommand::NearMe {
                origin: NearbyOrigin::Planar { x: 10.0, z: -20.0 }
            }
        );
    }

    #[test]
    fn test_near_me_three_args_is_spatial() {
        assert_eq!(
            parse_ok("!near_me 10 64 -20"),
            BotCommand::NearMe {
                origin: NearbyOrigin::Spatial {
                    x: 10.0,
                    y: 64.0,
                    z: -20.0
                }
            }
        );
    }

    #[test]
    fn test_near_me_third_zero_still_counts_as_given() {
        // 0 is a value, not "absent".
        assert_eq!(
            parse_ok("!near-me 10 64 0"),
            BotCommand::NearMe {
                origin: NearbyOrigin::Spatial {
                    x: 10.0,
                    y: 64.0,
                    z: 0.0
                }
            }
        );
    }

    #[test]
    fn test_add_keeps_the_rest_as_name() {
        assert_eq!(
            parse_ok("!add 1.5 64 -3 My  secret   base"),
            BotCommand::Add {
                x: 1.5,
                y: 64.0,
                z: -3.0,
                name: "My  secret   base".to_string()
            }
        );
    }

    #[test]
    fn test_add_without_a_name_is_missing_argument() {
        let err = parse("!", "!add 1 2 3").unwrap().unwrap_err();
        assert_eq!(err, CommandError::MissingArgument("name"));
    }

    #[test]
    fn test_edit_commands() {
        assert_eq!(
            parse_ok("!describe 4 deep in the jungle"),
            BotCommand::EditDescription {
                id: 4,
                description: "deep in the jungle".to_string()
            }
        );
        assert_eq!(
            parse_ok("!name 4 Jungle temple"),
            BotCommand::EditName {
                id: 4,
                name: "Jungle temple".to_string()
            }
        );
        assert_eq!(
            parse_ok("!locate 4 9 10 11"),
            BotCommand::EditLocation {
                id: 4,
                x: 9.0,
                y: 10.0,
                z: 11.0
            }
        );
        assert_eq!(
            parse_ok("!screenshot 4"),
            BotCommand::EditScreenshot { id: 4 }
        );
    }

    #[test]
    fn test_unknown_command() {
        let err = parse("!", "!teleport 1 2 3").unwrap().unwrap_err();
        assert_eq!(err, CommandError::UnknownCommand("teleport".to_string()));
    }
}
