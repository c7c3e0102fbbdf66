#[derive(Debug, Clone, Copy)]
pub enum Format {
    Json,
    Plain,
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "plain" => Ok(Format::Plain),
            _ => Err(format!("Invalid format: {}", s)),
        }
    }
}
