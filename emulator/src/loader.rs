use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("Bad instruction literal {literal:?} on line {line}")]
    BadLiteral { line: usize, literal: String },

    #[error("Program of {len} bytes doesn't fit into {}-byte memory", libisa::MEMORY_SIZE)]
    TooLarge { len: usize },
}

/// Parses the textual program encoding into the byte sequence the emulator
/// loads at address 0: one binary-literal instruction byte per line, `#`
/// starts a trailing comment, blank and comment-only lines are skipped.
pub fn parse_program(source: &str) -> Result<Vec<u8>, LoadError> {
    let mut program = Vec::new();

    for (index, raw_line) in source.lines().enumerate() {
        let literal = raw_line.split('#').next().unwrap_or("").trim();
        if literal.is_empty() {
            continue;
        }

        let byte = u8::from_str_radix(literal, 2).map_err(|_| LoadError::BadLiteral {
            line: index + 1,
            literal: literal.to_string(),
        })?;

        program.push(byte);
    }

    if program.len() > libisa::MEMORY_SIZE {
        return Err(LoadError::TooLarge {
            len: program.len(),
        });
    }

    Ok(program)
}
