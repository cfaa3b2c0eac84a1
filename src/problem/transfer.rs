//! Configuration of the quantities exchanged with the external solver.
//!
//! Two directions, two quantities each:
//!
//! | Parameter | Direction | Meaning |
//! |-----------|-----------|---------|
//! | `temp` | host → external | variable setting the boundary temperature |
//! | `heat_flux` | host → external | variable setting the wall heat flux |
//! | `external_temp` | external → host | variable receiving the boundary temperature |
//! | `external_heat_flux` | external → host | variable receiving the wall heat flux |
//!
//! Any parameter may be omitted. The two parameters of one direction must
//! not name the same variable.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{BcError, BcResult};

const PARAM_TEMP: &str = "temp";
const PARAM_HEAT_FLUX: &str = "heat_flux";
const PARAM_EXTERNAL_TEMP: &str = "external_temp";
const PARAM_EXTERNAL_HEAT_FLUX: &str = "external_heat_flux";

/// Direction of a solution sync.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncDirection {
    /// Host solution copied into the external solver
    ToExternal,
    /// External solution copied into the host
    FromExternal,
}

/// Which quantities take part in a sync.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncVariables {
    WallTemperature,
    WallHeatFlux,
    Both,
}

impl SyncVariables {
    /// Whether the wall temperature is transferred.
    pub fn transfers_temperature(self) -> bool {
        matches!(self, SyncVariables::WallTemperature | SyncVariables::Both)
    }

    /// Whether the wall heat flux is transferred.
    pub fn transfers_heat_flux(self) -> bool {
        matches!(self, SyncVariables::WallHeatFlux | SyncVariables::Both)
    }

    fn from_flags(temperature: bool, heat_flux: bool) -> Option<Self> {
        match (temperature, heat_flux) {
            (true, true) => Some(SyncVariables::Both),
            (true, false) => Some(SyncVariables::WallTemperature),
            (false, true) => Some(SyncVariables::WallHeatFlux),
            (false, false) => None,
        }
    }
}

/// Host variables used to exchange boundary data with the external solver.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferConfig {
    /// Host variable setting the external boundary temperature
    pub temp: Option<String>,
    /// Host variable setting the external wall heat flux
    pub heat_flux: Option<String>,
    /// Host variable receiving the external boundary temperature
    pub external_temp: Option<String>,
    /// Host variable receiving the external wall heat flux
    pub external_heat_flux: Option<String>,
}

impl TransferConfig {
    /// Check the configuration.
    ///
    /// An inert direction only logs a warning.
    ///
    /// # Errors
    /// `BcError::ConflictingTransfer` if both parameters of one direction
    /// name the same variable.
    pub fn validate(&self) -> BcResult<()> {
        check_pair(
            (PARAM_TEMP, set(&self.temp)),
            (PARAM_HEAT_FLUX, set(&self.heat_flux)),
            "No quantities are being transferred to the external solver.",
        )?;
        check_pair(
            (PARAM_EXTERNAL_TEMP, set(&self.external_temp)),
            (PARAM_EXTERNAL_HEAT_FLUX, set(&self.external_heat_flux)),
            "No quantities are being copied from the external solver.",
        )
    }

    /// Quantities exchanged in a given direction, `None` if nothing is.
    pub fn sync_variables(&self, direction: SyncDirection) -> Option<SyncVariables> {
        match direction {
            SyncDirection::ToExternal => SyncVariables::from_flags(
                set(&self.temp).is_some(),
                set(&self.heat_flux).is_some(),
            ),
            SyncDirection::FromExternal => SyncVariables::from_flags(
                set(&self.external_temp).is_some(),
                set(&self.external_heat_flux).is_some(),
            ),
        }
    }
}

// Empty strings count as unset.
fn set(param: &Option<String>) -> Option<&str> {
    param.as_deref().filter(|s| !s.is_empty())
}

fn check_pair(
    first: (&'static str, Option<&str>),
    second: (&'static str, Option<&str>),
    inert_message: &str,
) -> BcResult<()> {
    match (first.1, second.1) {
        (None, None) => {
            warn!(
                "Neither parameters '{}' or '{}' are set. {}",
                first.0, second.0, inert_message
            );
            Ok(())
        }
        (Some(a), Some(b)) if a == b => Err(BcError::ConflictingTransfer {
            first: first.0,
            second: second.0,
            variable: a.to_string(),
        }),
        _ => Ok(()),
    }
}
