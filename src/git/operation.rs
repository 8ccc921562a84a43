//! Named git operations exposed by a [`Git`](super::Git) handle

use std::fmt;
use std::str::FromStr;

/// One of the git subcommands a handle can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Status,
    Commit,
    Add,
    Init,
    Branch,
    Tag,
    Rm,
    HashObject,
    Checkout,
    Reset,
    Clean,
    Config,
}

impl Operation {
    pub const ALL: [Operation; 12] = [
        Operation::Status,
        Operation::Commit,
        Operation::Add,
        Operation::Init,
        Operation::Branch,
        Operation::Tag,
        Operation::Rm,
        Operation::HashObject,
        Operation::Checkout,
        Operation::Reset,
        Operation::Clean,
        Operation::Config,
    ];

    /// The literal git subcommand
    pub fn subcommand(self) -> &'static str {
        match self {
            Operation::HashObject => "hash-object",
            other => other.ident(),
        }
    }

    /// Identifier the operation is exposed under
    pub fn ident(self) -> &'static str {
        match self {
            Operation::Status => "status",
            Operation::Commit => "commit",
            Operation::Add => "add",
            Operation::Init => "init",
            Operation::Branch => "branch",
            Operation::Tag => "tag",
            Operation::Rm => "rm",
            Operation::HashObject => "hash_object",
            Operation::Checkout => "checkout",
            Operation::Reset => "reset",
            Operation::Clean => "clean",
            Operation::Config => "config",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ident())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.ident() == s)
            .ok_or_else(|| {
                let known: Vec<_> = Operation::ALL.iter().map(|op| op.ident()).collect();
                format!("unknown operation '{s}' (expected one of: {})", known.join(", "))
            })
    }
}
