//! Runtime selection between the available power models.

use crate::error::TurbineResult;
use crate::general::GeneralTurbine;
use crate::measured::{MeasuredTurbine, PowerCurve};
use crate::specs::TurbineSpecs;
use crate::traits::PowerModel;

/// Either power model, chosen explicitly by the caller.
#[derive(Clone, Debug, PartialEq)]
pub enum TurbineModel {
    General(GeneralTurbine),
    Measured(MeasuredTurbine),
}

impl TurbineModel {
    pub fn general(specs: TurbineSpecs) -> TurbineResult<Self> {
        Ok(Self::General(GeneralTurbine::new(specs)?))
    }

    pub fn measured(specs: TurbineSpecs, curve: PowerCurve) -> Self {
        Self::Measured(MeasuredTurbine::new(specs, curve))
    }

    fn inner(&self) -> &dyn PowerModel {
        match self {
            Self::General(t) => t,
            Self::Measured(t) => t,
        }
    }
}

impl From<GeneralTurbine> for TurbineModel {
    fn from(t: GeneralTurbine) -> Self {
        Self::General(t)
    }
}

impl From<MeasuredTurbine> for TurbineModel {
    fn from(t: MeasuredTurbine) -> Self {
        Self::Measured(t)
    }
}

impl PowerModel for TurbineModel {
    fn specs(&self) -> &TurbineSpecs {
        self.inner().specs()
    }

    fn model_kind(&self) -> &'static str {
        self.inner().model_kind()
    }

    fn power_at(&self, v: f64) -> f64 {
        self.inner().power_at(v)
    }
}
