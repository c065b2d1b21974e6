use std::path::Path;

pub const name: &str = env!("CARGO_PKG_NAME");
pub const version: &str = env!("CARGO_PKG_VERSION");
pub const description: &str = env!("CARGO_PKG_DESCRIPTION");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Form {
    Decimal,
    UpperHex,
    LowerHex,
    #[default]
    Summary,
}

impl Form {
    pub fn select(dec: bool, hex: bool, lowerhex: bool) -> Option<Self> {
        match (dec, hex, lowerhex) {
            (false, false, false) => Some(Form::Summary),
            (true, false, false) => Some(Form::Decimal),
            (false, true, false) => Some(Form::UpperHex),
            (false, false, true) => Some(Form::LowerHex),
            _ => None,
        }
    }
}

pub fn render(path: &Path, hash: u32, form: Form) -> String {
    match form {
        Form::Decimal => format!("{hash}"),
        Form::UpperHex => format!("{hash:X}"),
        Form::LowerHex => format!("{hash:x}"),
        Form::Summary => format!("{}\nCRC32 dec: {hash}\nCRC32 hex: {hash:X}", path.display()),
    }
}

pub fn usage() -> String {
    format!(
        "{name} v{version} - {description}\nCalculates CRC32 hash of a file\n\nUsage:\n\tcrc32 [-dec | -hex | -lowerhex] <file name>"
    )
}
