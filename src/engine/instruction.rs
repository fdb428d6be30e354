//! Flag model and the raw-token parser.
//!
//! A token stream like `-f notes.txt -a listen silent` becomes an ordered
//! sequence of [`Flag`] records: `-f` carrying `notes.txt`, `-a` carrying
//! `listen silent`. Tokens ahead of the first flag are dropped.

/// One recognized unit of user input: a flag name, the text that followed
/// it, and its position among the flags of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    /// The literal token used, short or long form (`-w`, `--words`).
    pub name: String,
    /// All following non-flag tokens joined with single spaces. Empty when
    /// no argument was given, never absent.
    pub argument: String,
    /// 0-based index among flags only, assigned in encounter order.
    pub position: usize,
    /// Reserved for cross-flag behavior changes. Another command may set
    /// this during its own validate phase (`-l` switches the following
    /// sort flag to the length comparator this way).
    pub modifier: i32,
}

impl Flag {
    fn open(name: &str, position: usize) -> Self {
        Flag {
            name: name.to_string(),
            argument: String::new(),
            position,
            modifier: 0,
        }
    }

    /// True when at least one argument token followed the flag.
    pub fn has_argument(&self) -> bool {
        !self.argument.is_empty()
    }

    /// True when the flag's literal name is one of `names`.
    pub fn name_in(&self, names: &[&str]) -> bool {
        names.contains(&self.name.as_str())
    }
}

/// The ordered collection of all flags parsed from one input batch.
#[derive(Debug, Clone, Default)]
pub struct Instruction {
    flags: Vec<Flag>,
}

impl Instruction {
    /// Parse a raw token stream into an ordered flag sequence.
    ///
    /// A token starting with `-` opens a new flag; any other token extends
    /// the argument of the currently open flag. Tokens before the first
    /// flag and empty tokens are ignored.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut flags = Vec::new();
        let mut open: Option<Flag> = None;
        let mut position = 0usize;

        for token in tokens {
            let token = token.as_ref();
            if token.is_empty() {
                continue;
            }

            if token.starts_with('-') {
                if let Some(flag) = open.take() {
                    flags.push(seal(flag));
                }
                open = Some(Flag::open(token, position));
                position += 1;
            } else if let Some(flag) = open.as_mut() {
                flag.argument.push_str(token);
                flag.argument.push(' ');
            }
        }

        if let Some(flag) = open.take() {
            flags.push(seal(flag));
        }

        Instruction { flags }
    }

    /// First flag whose literal name is `name`.
    pub fn flag_named(&self, name: &str) -> Option<&Flag> {
        self.flags.iter().find(|flag| flag.name == name)
    }

    /// Flag at `position`, if one exists.
    pub fn flag_at(&self, position: usize) -> Option<&Flag> {
        self.flags.iter().find(|flag| flag.position == position)
    }

    /// Mutable access to the flag at `position`. This is the only mutation
    /// path after parsing; commands use it to set another flag's modifier
    /// during their validate phase.
    pub fn flag_at_mut(&mut self, position: usize) -> Option<&mut Flag> {
        self.flags.iter_mut().find(|flag| flag.position == position)
    }

    /// True when a flag answers to `caller` or `alias`.
    pub fn contains(&self, caller: &str, alias: &str) -> bool {
        self.flags
            .iter()
            .any(|flag| flag.name == caller || flag.name == alias)
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }
}

/// Drop the single trailing space the argument accumulator leaves behind.
fn seal(mut flag: Flag) -> Flag {
    if flag.argument.ends_with(' ') {
        flag.argument.pop();
    }
    flag
}
