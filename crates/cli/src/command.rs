//! Command language: one line in, one `Command` out.
//!
//! Keywords are resolved here, once; the session only ever sees the enum.

use std::path::PathBuf;

use convex2d::Point;

use crate::error::CommandError;

/// Single-polygon queries (`KEYWORD NAME`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Query {
    Print,
    Area,
    Perimeter,
    Vertices,
    Centroid,
    Edges,
    Regular,
    GetColor,
    Width,
    Height,
}

/// Binary polygon operations stored into a target name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combine {
    Intersection,
    Union,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Define {
        name: String,
        points: Vec<Point>,
    },
    Query {
        query: Query,
        name: String,
    },
    SetColor {
        name: String,
        rgb: [f64; 3],
    },
    List,
    Save {
        file: PathBuf,
        names: Vec<String>,
    },
    Load {
        file: PathBuf,
    },
    Draw {
        file: PathBuf,
        names: Vec<String>,
    },
    /// `target := left op right`; with `right` absent, `target := target op left`.
    Combine {
        op: Combine,
        target: String,
        left: String,
        right: Option<String>,
    },
    Inside {
        inner: String,
        outer: String,
    },
    BoundingBox {
        target: String,
        sources: Vec<String>,
    },
    Comment,
}

fn real(token: &str) -> Result<f64, CommandError> {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(CommandError::WrongType),
    }
}

/// Pairs of coordinates; an odd count is an arity error.
pub fn parse_points(tokens: &[&str]) -> Result<Vec<Point>, CommandError> {
    if tokens.len() % 2 != 0 {
        return Err(CommandError::WrongArity);
    }
    tokens
        .chunks_exact(2)
        .map(|xy| Ok(Point::new(real(xy[0])?, real(xy[1])?)))
        .collect()
}

fn owned(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|s| s.to_string()).collect()
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        use CommandError::WrongArity;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&keyword, args)) = tokens.split_first() else {
            return Err(CommandError::InvalidCommand);
        };
        let query = match keyword {
            "print" => Some(Query::Print),
            "area" => Some(Query::Area),
            "perimeter" => Some(Query::Perimeter),
            "vertices" => Some(Query::Vertices),
            "centroid" => Some(Query::Centroid),
            "edges" => Some(Query::Edges),
            "regular" => Some(Query::Regular),
            "getcol" => Some(Query::GetColor),
            "width" => Some(Query::Width),
            "height" => Some(Query::Height),
            _ => None,
        };
        if let Some(query) = query {
            return match args {
                [name] => Ok(Command::Query {
                    query,
                    name: name.to_string(),
                }),
                _ => Err(WrongArity),
            };
        }
        match keyword {
            "#" => Ok(Command::Comment),
            "polygon" => match args {
                [name, coords @ ..] => Ok(Command::Define {
                    name: name.to_string(),
                    points: parse_points(coords)?,
                }),
                [] => Err(WrongArity),
            },
            "setcol" => match args {
                [name, r, g, b] => Ok(Command::SetColor {
                    name: name.to_string(),
                    rgb: [real(r)?, real(g)?, real(b)?],
                }),
                _ => Err(WrongArity),
            },
            "list" => match args {
                [] => Ok(Command::List),
                _ => Err(WrongArity),
            },
            "save" => match args {
                [file, names @ ..] => Ok(Command::Save {
                    file: PathBuf::from(file),
                    names: owned(names),
                }),
                [] => Err(WrongArity),
            },
            "load" => match args {
                [file] => Ok(Command::Load {
                    file: PathBuf::from(file),
                }),
                _ => Err(WrongArity),
            },
            "draw" => match args {
                [file, names @ ..] => Ok(Command::Draw {
                    file: PathBuf::from(file),
                    names: owned(names),
                }),
                [] => Err(WrongArity),
            },
            "intersection" | "union" => {
                let op = if keyword == "union" {
                    Combine::Union
                } else {
                    Combine::Intersection
                };
                let (target, left, right) = match args {
                    [t, l] => (t, l, None),
                    [t, l, r] => (t, l, Some(r.to_string())),
                    _ => return Err(WrongArity),
                };
                Ok(Command::Combine {
                    op,
                    target: target.to_string(),
                    left: left.to_string(),
                    right,
                })
            }
            "inside" => match args {
                [inner, outer] => Ok(Command::Inside {
                    inner: inner.to_string(),
                    outer: outer.to_string(),
                }),
                _ => Err(WrongArity),
            },
            "bbox" => match args {
                [target, sources @ ..] => Ok(Command::BoundingBox {
                    target: target.to_string(),
                    sources: owned(sources),
                }),
                [] => Err(WrongArity),
            },
            _ => Err(CommandError::InvalidCommand),
        }
    }
}
