// std imports
use std::io::{BufRead, Write};

// third-party imports
use itertools::Itertools;

// local imports
use crate::{
    error::Result,
    filter::{FilterOptions, NameFilter},
    input::InputReference,
    predicate::Predicate,
};

// ---

#[derive(Debug, Clone, Default)]
pub struct Options {
    pub filter: FilterOptions,
    pub count: bool,
}

// ---

/// Filters names read line by line from inputs.
pub struct App {
    options: Options,
    filter: NameFilter,
}

impl App {
    pub fn new(options: Options) -> Self {
        let filter = NameFilter::new(&options.filter);
        log::debug!(
            "name filter: include [{}], exclude [{}], invert {}",
            filter.options().include.iter().map(|x| format!("{:?}", x)).join(", "),
            filter.options().exclude.iter().map(|x| format!("{:?}", x)).join(", "),
            filter.options().invert,
        );
        Self { options, filter }
    }

    /// Processes all inputs in order and writes accepted names or their count to the output.
    pub fn run(&self, inputs: &[InputReference], output: &mut dyn Write) -> Result<()> {
        let mut total = 0;
        for reference in inputs {
            let mut input = reference.open()?;
            let accepted = self.process(&mut input.stream, output)?;
            log::debug!("{}: {} names accepted", reference.description(), accepted);
            total += accepted;
        }

        if self.options.count {
            writeln!(output, "{}", total)?;
        }
        output.flush()?;

        Ok(())
    }

    /// Processes a single input and returns the number of accepted names.
    ///
    /// Each line is a name, the line terminator is not part of it.
    /// Lines that are not valid UTF-8 are matched after lossy conversion and written unchanged.
    pub fn process<R: BufRead + ?Sized>(&self, input: &mut R, output: &mut dyn Write) -> Result<usize> {
        let mut accepted = 0;
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let line = trim_line_terminator(&buf);
            let name = String::from_utf8_lossy(line);
            if !self.filter.matches(&name) {
                log::trace!("rejected {:?}", name);
                continue;
            }

            accepted += 1;
            if !self.options.count {
                output.write_all(line)?;
                output.write_all(b"\n")?;
            }
        }

        Ok(accepted)
    }
}

fn trim_line_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests;
