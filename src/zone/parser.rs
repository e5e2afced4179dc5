use std::collections::VecDeque;
use std::str::FromStr;

use tracing::{debug, trace};

use super::{Result, ZoneError, ZoneRecord};
use crate::dns::enums::{RecordClass, RecordType};

/// RFC 1035 zone file parser.
///
/// Records come out through [`RecordStream`]: a finite, consume-once iterator
/// of tagged results. A malformed line surfaces as an `Err` item for that
/// record only; the stream keeps going.
pub struct ZoneParser {
    /// Current origin for relative names, dot-terminated
    origin: String,
    /// Current default TTL from $TTL
    current_ttl: Option<u32>,
    /// Current class
    current_class: RecordClass,
    /// Owner name of the previous record, for blank-name inheritance
    last_name: Option<String>,
}

impl ZoneParser {
    /// Create a parser seeded with the zone's declared origin
    pub fn new(origin: &str) -> Self {
        let mut origin = origin.trim().to_string();
        if !origin.ends_with('.') {
            origin.push('.');
        }
        Self {
            origin,
            current_ttl: None,
            current_class: RecordClass::IN,
            last_name: None,
        }
    }

    /// Stream the records out of zone file contents
    pub fn records<'a>(&'a mut self, contents: &'a str) -> RecordStream<'a> {
        RecordStream {
            parser: self,
            lines: contents.lines(),
            line_number: 0,
            generated: VecDeque::new(),
        }
    }

    /// Qualify an owner name against the current origin
    fn qualify(&self, name: &str) -> String {
        let name = name.trim();
        if name == "@" || name.is_empty() {
            self.origin.clone()
        } else if name.ends_with('.') {
            name.to_string()
        } else {
            format!("{name}.{}", self.origin)
        }
    }

    /// Handle a $-directive line
    fn apply_directive(
        &mut self,
        line: &str,
        generated: &mut VecDeque<ZoneRecord>,
    ) -> Result<()> {
        let parts: Vec<&str> = line.split_whitespace().collect();

        match parts[0].to_uppercase().as_str() {
            "$ORIGIN" => {
                let origin = parts.get(1).ok_or_else(|| {
                    ZoneError::ParseError("$ORIGIN requires domain name".to_string())
                })?;
                let mut origin = origin.to_string();
                if !origin.ends_with('.') {
                    origin.push('.');
                }
                debug!("set origin to {}", origin);
                self.origin = origin;
            }
            "$TTL" => {
                let value = parts
                    .get(1)
                    .ok_or_else(|| ZoneError::ParseError("$TTL requires value".to_string()))?;
                let ttl = parse_ttl(value)?;
                debug!("set default TTL to {}", ttl);
                self.current_ttl = Some(ttl);
            }
            "$GENERATE" => self.apply_generate(&parts, generated)?,
            other => {
                // $INCLUDE would pull file IO into the stream; not supported
                debug!("ignoring unsupported directive {}", other);
            }
        }

        Ok(())
    }

    /// Expand a $GENERATE directive into the stream
    fn apply_generate(
        &mut self,
        parts: &[&str],
        generated: &mut VecDeque<ZoneRecord>,
    ) -> Result<()> {
        if parts.len() < 5 {
            return Err(ZoneError::ParseError(
                "$GENERATE requires range, lhs, type, and rhs".to_string(),
            ));
        }

        let (start, stop, step) = parse_generate_range(parts[1])?;
        let lhs = parts[2];
        let rtype = RecordType::from_str(parts[3])
            .map_err(|_| ZoneError::InvalidRRType(parts[3].to_string()))?;
        let rhs = parts[4..].join(" ");

        let mut i = start;
        loop {
            // Expand ${offset,width,base} specifiers first, then plain $
            let name = expand_generate_format(lhs, i)?.replace('$', &i.to_string());
            let rdata = expand_generate_format(&rhs, i)?.replace('$', &i.to_string());

            generated.push_back(ZoneRecord::new(
                self.qualify(&name),
                self.current_ttl,
                self.current_class,
                rtype,
                rdata,
                None,
            ));
            i = match i.checked_add(step) {
                Some(next) if next <= stop => next,
                _ => break,
            };
        }

        debug!("generated {} records from $GENERATE", (stop - start) / step + 1);
        Ok(())
    }

    /// Parse one logical record line (parentheses already folded away)
    fn parse_record(&mut self, line: &str, comment: Option<String>) -> Result<ZoneRecord> {
        let parts = tokenize(line);
        if parts.is_empty() {
            return Err(ZoneError::ParseError("empty record line".to_string()));
        }

        let mut idx = 0;
        let name = if line.starts_with(' ') || line.starts_with('\t') {
            // Leading whitespace inherits the previous owner name
            match &self.last_name {
                Some(prev) => prev.clone(),
                None => self.origin.clone(),
            }
        } else {
            let name = self.qualify(&parts[idx]);
            idx += 1;
            name
        };

        let mut ttl = self.current_ttl;
        let mut class = self.current_class;
        let mut rtype = None;

        // TTL, class, and type may appear in any order before the RDATA
        while idx < parts.len() && rtype.is_none() {
            let field = &parts[idx];

            if let Ok(value) = parse_ttl(field) {
                ttl = Some(value);
                idx += 1;
                continue;
            }

            if let Ok(parsed) = RecordClass::from_str(field) {
                class = parsed;
                idx += 1;
                continue;
            }

            if let Ok(parsed) = RecordType::from_str(field) {
                rtype = Some(parsed);
                idx += 1;
                break;
            }

            return Err(ZoneError::ParseError(format!("invalid field: {field}")));
        }

        let rtype =
            rtype.ok_or_else(|| ZoneError::ParseError("missing record type".to_string()))?;

        if idx >= parts.len() {
            return Err(ZoneError::ParseError("missing RDATA".to_string()));
        }
        let rdata = parts[idx..].join(" ");

        self.last_name = Some(name.clone());
        Ok(ZoneRecord::new(name, ttl, class, rtype, rdata, comment))
    }
}

/// Iterator over the records of one zone file
pub struct RecordStream<'a> {
    parser: &'a mut ZoneParser,
    lines: std::str::Lines<'a>,
    line_number: usize,
    /// Records synthesized by $GENERATE, drained ahead of the next line
    generated: VecDeque<ZoneRecord>,
}

impl Iterator for RecordStream<'_> {
    type Item = Result<ZoneRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(record) = self.generated.pop_front() {
                return Some(Ok(record));
            }

            let line = self.lines.next()?;
            self.line_number += 1;

            let (body, mut comment) = split_comment(line);
            if body.trim().is_empty() {
                continue;
            }

            trace!("parsing line {}: {}", self.line_number, body);

            // Fold a parenthesized multi-line record into one logical line
            let mut text = body.to_string();
            let mut depth = paren_depth(body);
            let start_line = self.line_number;
            while depth > 0 {
                let Some(next_line) = self.lines.next() else {
                    return Some(Err(ZoneError::ParseError(format!(
                        "unclosed parentheses starting at line {start_line}"
                    ))));
                };
                self.line_number += 1;

                let (cont, cont_comment) = split_comment(next_line);
                if cont_comment.is_some() {
                    comment = cont_comment;
                }
                text.push(' ');
                text.push_str(cont.trim());
                depth += paren_depth(cont);
            }

            if text.trim_start().starts_with('$') {
                match self.parser.apply_directive(&text, &mut self.generated) {
                    Ok(()) => continue,
                    Err(e) => return Some(Err(e.at_line(start_line))),
                }
            }

            return Some(
                self.parser
                    .parse_record(&text, comment)
                    .map_err(|e| e.at_line(start_line)),
            );
        }
    }
}

/// Split a line into record body and trailing comment.
///
/// Only an unquoted `;` opens a comment; semicolons inside quoted strings are
/// data. The returned comment has leading semicolons and edge whitespace
/// removed.
fn split_comment(line: &str) -> (&str, Option<String>) {
    let mut in_quotes = false;
    for (i, ch) in line.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => {
                let comment = line[i..].trim_start_matches(';').trim();
                let comment = (!comment.is_empty()).then(|| comment.to_string());
                return (&line[..i], comment);
            }
            _ => {}
        }
    }
    (line, None)
}

/// Net parenthesis nesting change for a line, ignoring quoted strings
fn paren_depth(line: &str) -> i32 {
    let mut depth = 0;
    let mut in_quotes = false;
    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            '(' if !in_quotes => depth += 1,
            ')' if !in_quotes => depth -= 1,
            _ => {}
        }
    }
    depth
}

/// Split a record line into fields, keeping quoted strings intact and
/// dropping grouping parentheses
fn tokenize(line: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            '(' | ')' if !in_quotes => {}
            ' ' | '\t' if !in_quotes => {
                if !current.is_empty() {
                    parts.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(ch),
        }
    }
    if !current.is_empty() {
        parts.push(current);
    }

    parts
}

/// Parse a TTL value, with support for s/m/h/d/w suffixes
fn parse_ttl(s: &str) -> Result<u32> {
    let s = s.to_lowercase();
    let (digits, multiplier) = if let Some(rest) = s.strip_suffix('s') {
        (rest, 1)
    } else if let Some(rest) = s.strip_suffix('m') {
        (rest, 60)
    } else if let Some(rest) = s.strip_suffix('h') {
        (rest, 3600)
    } else if let Some(rest) = s.strip_suffix('d') {
        (rest, 86400)
    } else if let Some(rest) = s.strip_suffix('w') {
        (rest, 604800)
    } else {
        (s.as_str(), 1)
    };

    digits
        .parse::<u32>()
        .ok()
        .and_then(|n| n.checked_mul(multiplier))
        .ok_or_else(|| ZoneError::InvalidTTL(s.clone()))
}

/// Parse a $GENERATE range: start-stop[/step]
fn parse_generate_range(range: &str) -> Result<(u32, u32, u32)> {
    let (bounds, step) = match range.split_once('/') {
        Some((bounds, step)) => {
            let step = step.parse::<u32>().map_err(|_| {
                ZoneError::ParseError(format!("invalid $GENERATE step: {step}"))
            })?;
            (bounds, step)
        }
        None => (range, 1),
    };

    let (start, stop) = bounds.split_once('-').ok_or_else(|| {
        ZoneError::ParseError("$GENERATE range must contain '-'".to_string())
    })?;
    let start = start
        .parse::<u32>()
        .map_err(|_| ZoneError::ParseError(format!("invalid $GENERATE start: {start}")))?;
    let stop = stop
        .parse::<u32>()
        .map_err(|_| ZoneError::ParseError(format!("invalid $GENERATE stop: {stop}")))?;

    if start > stop {
        return Err(ZoneError::ParseError(
            "$GENERATE start must be <= stop".to_string(),
        ));
    }
    if step == 0 {
        return Err(ZoneError::ParseError(
            "$GENERATE step must be > 0".to_string(),
        ));
    }

    Ok((start, stop, step))
}

/// Expand ${offset,width,base} format specifiers in a $GENERATE template
fn expand_generate_format(template: &str, value: u32) -> Result<String> {
    let mut result = String::new();
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '$' || chars.peek() != Some(&'{') {
            result.push(ch);
            continue;
        }
        chars.next(); // consume '{'

        let mut spec = String::new();
        let mut closed = false;
        for c in chars.by_ref() {
            if c == '}' {
                closed = true;
                break;
            }
            spec.push(c);
        }
        if !closed {
            return Err(ZoneError::ParseError(
                "unclosed ${} in $GENERATE".to_string(),
            ));
        }

        let fields: Vec<&str> = spec.split(',').collect();
        if fields.len() != 3 {
            return Err(ZoneError::ParseError(
                "invalid $GENERATE format, expected ${offset,width,base}".to_string(),
            ));
        }

        let offset = fields[0]
            .parse::<u32>()
            .map_err(|_| ZoneError::ParseError(format!("invalid offset: {}", fields[0])))?;
        let width = fields[1]
            .parse::<usize>()
            .map_err(|_| ZoneError::ParseError(format!("invalid width: {}", fields[1])))?;
        let adjusted = value.checked_add(offset).ok_or_else(|| {
            ZoneError::ParseError(format!("$GENERATE value {value} overflows with offset {offset}"))
        })?;

        let formatted = match fields[2] {
            "d" => format!("{adjusted:0width$}"),
            "o" => format!("{adjusted:0width$o}"),
            "x" => format!("{adjusted:0width$x}"),
            "X" => format!("{adjusted:0width$X}"),
            base => {
                return Err(ZoneError::ParseError(format!("invalid base: {base}")));
            }
        };
        result.push_str(&formatted);
    }

    Ok(result)
}
