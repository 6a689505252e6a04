use clap::ValueEnum;
use std::fmt;

/// Preprocessor macro the descriptor is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MacroName {
    /// `-DGIT_VERSION="..."`
    #[default]
    GitVersion,
    /// `-DVERSION="..."`
    Version,
}

impl MacroName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MacroName::GitVersion => "GIT_VERSION",
            MacroName::Version => "VERSION",
        }
    }
}

impl fmt::Display for MacroName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compiler flag defining `name` as the quoted descriptor, without a newline.
/// The descriptor bytes go in verbatim.
pub fn format_define(name: MacroName, descriptor: &[u8]) -> Vec<u8> {
    let mut flag = Vec::with_capacity(name.as_str().len() + descriptor.len() + 5);
    flag.extend_from_slice(b"-D");
    flag.extend_from_slice(name.as_str().as_bytes());
    flag.extend_from_slice(b"=\"");
    flag.extend_from_slice(descriptor);
    flag.push(b'"');
    flag
}
