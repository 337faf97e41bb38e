//! What happens at the edges of the grid.

use educe::Educe;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The boundary policy used when counting neighbors.
///
/// The policy is applied uniformly to every edge and corner of the grid.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Boundary {
    /// `clipped`.
    ///
    /// Cells outside the grid are not counted.
    /// A corner cell has 3 neighbors, an edge cell has 5.
    #[educe(Default)]
    #[cfg_attr(feature = "serde", serde(rename = "clipped", alias = "plane"))]
    Clipped,

    /// `torus`.
    ///
    /// Opposite edges of the grid are stitched together.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "torus", alias = "toroidal", alias = "wrap")
    )]
    Torus,
}

impl FromStr for Boundary {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clipped" | "plane" => Ok(Boundary::Clipped),
            "torus" | "toroidal" | "wrap" => Ok(Boundary::Torus),
            _ => Err(String::from("invalid boundary")),
        }
    }
}

impl Display for Boundary {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            Boundary::Clipped => "clipped",
            Boundary::Torus => "torus",
        };
        write!(f, "{}", s)?;
        Ok(())
    }
}
