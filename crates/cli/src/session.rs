//! Named-polygon registry and command execution.

use anyhow::Result;
use convex2d::{Color, Polygon};
use std::collections::BTreeMap;
use std::io::{BufRead, Write};

use crate::command::{Combine, Command, Query};
use crate::error::CommandError;
use crate::{draw, store};

/// State of one command stream: the polygons defined so far.
pub struct Session {
    polygons: BTreeMap<String, Polygon>,
    precision: usize,
}

impl Session {
    pub fn new(precision: usize) -> Self {
        Self {
            polygons: BTreeMap::new(),
            precision,
        }
    }

    pub fn polygons(&self) -> &BTreeMap<String, Polygon> {
        &self.polygons
    }

    /// Parse and execute one line, returning the response line.
    pub fn respond(&mut self, line: &str) -> String {
        match Command::parse(line).and_then(|cmd| self.execute(cmd)) {
            Ok(out) => out,
            Err(e) => {
                tracing::warn!(line, error = ?e, "rejected");
                format!("error: {e}")
            }
        }
    }

    fn get(&self, name: &str) -> Result<&Polygon, CommandError> {
        self.polygons.get(name).ok_or_else(|| {
            tracing::debug!(name, "unknown polygon");
            CommandError::Undefined
        })
    }

    fn real(&self, v: f64) -> String {
        format!("{v:.prec$}", prec = self.precision)
    }

    pub fn execute(&mut self, cmd: Command) -> Result<String, CommandError> {
        tracing::debug!(?cmd, "execute");
        match cmd {
            Command::Comment => Ok("#".to_string()),
            Command::Define { name, points } => {
                self.polygons.insert(name, Polygon::new(&points));
                Ok("ok".to_string())
            }
            Command::Query { query, name } => self.query(query, &name),
            Command::SetColor { name, rgb } => {
                self.get(&name)?;
                let color =
                    Color::new(rgb[0], rgb[1], rgb[2]).map_err(|_| CommandError::WrongType)?;
                if let Some(p) = self.polygons.get_mut(&name) {
                    p.set_color(color);
                }
                Ok("ok".to_string())
            }
            Command::List => Ok(self
                .polygons
                .keys()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" ")),
            Command::Save { file, names } => {
                let entries = names
                    .iter()
                    .map(|n| Ok((n.as_str(), self.get(n)?)))
                    .collect::<Result<Vec<_>, CommandError>>()?;
                store::save(&file, &entries)?;
                tracing::info!(file = %file.display(), count = entries.len(), "saved");
                Ok("ok".to_string())
            }
            Command::Load { file } => {
                let loaded = store::load(&file)?;
                let count = loaded.len();
                for (name, points) in loaded {
                    self.polygons
                        .entry(name)
                        .or_insert_with(|| Polygon::new(&points));
                }
                tracing::info!(file = %file.display(), count, "loaded");
                Ok("ok".to_string())
            }
            Command::Draw { file, names } => {
                let polys = names
                    .iter()
                    .map(|n| self.get(n))
                    .collect::<Result<Vec<_>, _>>()?;
                draw::write_png(&file, &polys)?;
                tracing::info!(file = %file.display(), count = polys.len(), "drawn");
                Ok("ok".to_string())
            }
            Command::Combine {
                op,
                target,
                left,
                right,
            } => {
                let (a, b) = match &right {
                    Some(r) => (self.get(&left)?, self.get(r)?),
                    None => (self.get(&target)?, self.get(&left)?),
                };
                let result = match op {
                    Combine::Intersection => a.intersection(b),
                    Combine::Union => a.union(b),
                };
                self.polygons.insert(target, result);
                Ok("ok".to_string())
            }
            Command::Inside { inner, outer } => {
                let yes = self.get(&inner)?.is_inside(self.get(&outer)?);
                Ok(yes_not(yes))
            }
            Command::BoundingBox { target, sources } => {
                let mut acc = Polygon::default();
                for s in &sources {
                    acc = acc.union(self.get(s)?);
                }
                self.polygons.insert(target, acc.bbox());
                Ok("ok".to_string())
            }
        }
    }

    fn query(&self, query: Query, name: &str) -> Result<String, CommandError> {
        let p = self.get(name)?;
        Ok(match query {
            Query::Print => {
                let mut line = name.to_string();
                for v in p.vertices() {
                    line.push_str(&format!(" {} {}", self.real(v.x), self.real(v.y)));
                }
                line
            }
            Query::Area => self.real(p.area()),
            Query::Perimeter => self.real(p.perimeter()),
            Query::Vertices => p.vertex_count().to_string(),
            Query::Centroid => {
                let c = p.centroid().ok_or(CommandError::EmptyPolygon)?;
                format!("{} {}", self.real(c.x), self.real(c.y))
            }
            Query::Edges => p.edge_count().to_string(),
            Query::Regular => yes_not(p.is_regular()),
            Query::GetColor => {
                let c = p.color();
                format!(
                    "R: {} G: {} B: {}",
                    self.real(c.r()),
                    self.real(c.g()),
                    self.real(c.b())
                )
            }
            Query::Width => self.real(p.width()),
            Query::Height => self.real(p.height()),
        })
    }
}

fn yes_not(b: bool) -> String {
    String::from(if b { "yes" } else { "not" })
}

/// Answer every line of `input` on `output`, flushing after each response.
///
/// A line that is not UTF-8 is answered as an invalid command.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, mut output: W) -> Result<()> {
    let mut count = 0usize;
    for raw in input.split(b'\n') {
        let mut raw = raw?;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        let response = match String::from_utf8(raw) {
            Ok(line) => session.respond(&line),
            Err(e) => {
                tracing::warn!(error = %e, "line is not UTF-8");
                format!("error: {}", CommandError::InvalidCommand)
            }
        };
        writeln!(output, "{response}")?;
        output.flush()?;
        count += 1;
    }
    tracing::info!(commands = count, polygons = session.polygons().len(), "session done");
    Ok(())
}
