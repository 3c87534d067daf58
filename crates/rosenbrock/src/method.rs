use std::{fmt, str::FromStr};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::Error;

/// The available Rosenbrock schemes.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Method {
    /// Modified Rosenbrock triple, 2nd order with a 3rd order error estimate
    #[cfg_attr(feature = "serde-serialize", serde(rename = "MRT"))]
    Mrt,
    /// 3 stage, 3rd order W-method with a 2nd order embedded solution
    #[cfg_attr(feature = "serde-serialize", serde(rename = "ROS3PRw"))]
    Ros3prw,
    /// 4 stage, 4th order W-method with a 3rd order embedded solution
    #[default]
    #[cfg_attr(feature = "serde-serialize", serde(rename = "ROS34PRw"))]
    Ros34prw,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Mrt, Method::Ros3prw, Method::Ros34prw];

    /// Short name, as accepted by [`FromStr`]
    pub fn name(&self) -> &'static str {
        match self {
            Method::Mrt => "MRT",
            Method::Ros3prw => "ROS3PRw",
            Method::Ros34prw => "ROS34PRw",
        }
    }

    /// Name used in failure messages
    pub fn title(&self) -> &'static str {
        match self {
            Method::Mrt => "modified Rosenbrock triple",
            Method::Ros3prw => "ROS3PRw",
            Method::Ros34prw => "ROS34PRw",
        }
    }

    /// Number of stages, each one a linear solve with the iteration matrix
    pub fn stages(&self) -> usize {
        match self {
            Method::Mrt | Method::Ros3prw => 3,
            Method::Ros34prw => 4,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Method::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownMethod(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("MRT".parse::<Method>().unwrap(), Method::Mrt);
        assert_eq!("ros3prw".parse::<Method>().unwrap(), Method::Ros3prw);
        assert_eq!(" ROS34PRW ".parse::<Method>().unwrap(), Method::Ros34prw);
        assert!(matches!(
            "RK4".parse::<Method>(),
            Err(Error::UnknownMethod(name)) if name == "RK4"
        ));
    }

    #[test]
    fn test_display_roundtrip() {
        for method in Method::ALL {
            assert_eq!(method.to_string().parse::<Method>().unwrap(), method);
        }
        assert_eq!(Method::default(), Method::Ros34prw);
    }
}
