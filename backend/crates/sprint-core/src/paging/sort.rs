use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;

/// Sprint properties a page may be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortProperty {
    Id,
    Name,
    Goal,
    StartDate,
    EndDate,
    Status,
}

impl SortProperty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Goal => "goal",
            Self::StartDate => "start_date",
            Self::EndDate => "end_date",
            Self::Status => "status",
        }
    }

    /// Column backing this property. Only ever one of a fixed set of names,
    /// so it is safe to splice into an ORDER BY clause.
    pub fn column(&self) -> &'static str {
        self.as_str()
    }
}

impl FromStr for SortProperty {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "goal" => Ok(Self::Goal),
            "start_date" | "startDate" => Ok(Self::StartDate),
            "end_date" | "endDate" => Ok(Self::EndDate),
            "status" => Ok(Self::Status),
            _ => Err(CoreError::InvalidSortProperty {
                property: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(CoreError::InvalidSortDirection {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

/// One ordering criterion, written on the wire as `property[,asc|desc]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sort {
    pub property: SortProperty,
    pub direction: SortDirection,
}

impl Sort {
    pub fn asc(property: SortProperty) -> Self {
        Self {
            property,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(property: SortProperty) -> Self {
        Self {
            property,
            direction: SortDirection::Desc,
        }
    }
}

impl FromStr for Sort {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        let mut parts = s.split(',').map(str::trim);

        let property = parts.next().unwrap_or_default().parse::<SortProperty>()?;
        let direction = match parts.next() {
            Some(dir) if !dir.is_empty() => dir.parse::<SortDirection>()?,
            _ => SortDirection::default(),
        };

        if let Some(extra) = parts.next() {
            return Err(CoreError::InvalidSortDirection {
                value: extra.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            property,
            direction,
        })
    }
}

impl Sort {
    /// Parse one `sort` query value: `prop[,prop...][,asc|desc]`.
    ///
    /// A trailing direction applies to every listed property.
    #[track_caller]
    pub fn parse_list(s: &str) -> CoreResult<Vec<Self>> {
        let mut tokens: Vec<&str> = s
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();

        let trailing = match tokens.as_slice() {
            [_, .., last] => last.parse::<SortDirection>().ok(),
            _ => None,
        };
        if trailing.is_some() {
            tokens.pop();
        }
        let direction = trailing.unwrap_or_default();

        tokens
            .into_iter()
            .map(|token| {
                Ok(Self {
                    property: token.parse::<SortProperty>()?,
                    direction,
                })
            })
            .collect()
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir = match self.direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        write!(f, "{},{}", self.property.as_str(), dir)
    }
}
