//! Field groups shared by many property types.
//!
//! A property composes a group by embedding it; the group's fields are
//! always emitted before the property's own fields. Builders get the group's
//! setters through the blanket [`DeletableExt`] and [`InterpolatableExt`]
//! traits.

use crate::encoder::FieldWriter;
use crate::enums::{ExtrapolationType, InterpolationAlgorithm};
use crate::time::Timestamp;
use crate::values::Number;

/// A set of fields shared across property types.
pub trait FieldGroup {
    /// Write the group's fields in CZML order.
    fn write_group<W: FieldWriter>(&self, writer: &mut W) -> Result<(), W::Error>;

    /// Whether the group marks its owner as deleted.
    fn is_deleted(&self) -> bool {
        false
    }
}

/// Access to an embedded field group, implemented by builders.
pub trait WithFields<G>: Sized {
    /// The embedded group.
    fn fields_mut(&mut self) -> &mut G;
}

/// A property whose data can be deleted on the client.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Deletable {
    delete: Option<bool>,
}

impl Deletable {
    /// The `delete` flag, if set.
    pub fn delete(&self) -> Option<bool> {
        self.delete
    }
}

impl FieldGroup for Deletable {
    fn write_group<W: FieldWriter>(&self, writer: &mut W) -> Result<(), W::Error> {
        writer.field("delete", self.delete.as_ref())
    }

    fn is_deleted(&self) -> bool {
        self.delete == Some(true)
    }
}

/// A property whose value may be interpolated between time-tagged samples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Interpolatable {
    epoch: Option<Timestamp>,
    interpolation_algorithm: Option<InterpolationAlgorithm>,
    interpolation_degree: Option<u32>,
    forward_extrapolation_type: Option<ExtrapolationType>,
    forward_extrapolation_duration: Option<Number>,
    backward_extrapolation_type: Option<ExtrapolationType>,
    backward_extrapolation_duration: Option<Number>,
}

impl Interpolatable {
    /// Epoch of sample times given in seconds.
    pub fn epoch(&self) -> Option<&Timestamp> {
        self.epoch.as_ref()
    }

    pub fn interpolation_algorithm(&self) -> Option<InterpolationAlgorithm> {
        self.interpolation_algorithm
    }

    pub fn interpolation_degree(&self) -> Option<u32> {
        self.interpolation_degree
    }

    pub fn forward_extrapolation_type(&self) -> Option<ExtrapolationType> {
        self.forward_extrapolation_type
    }

    pub fn forward_extrapolation_duration(&self) -> Option<Number> {
        self.forward_extrapolation_duration
    }

    pub fn backward_extrapolation_type(&self) -> Option<ExtrapolationType> {
        self.backward_extrapolation_type
    }

    pub fn backward_extrapolation_duration(&self) -> Option<Number> {
        self.backward_extrapolation_duration
    }
}

impl FieldGroup for Interpolatable {
    fn write_group<W: FieldWriter>(&self, writer: &mut W) -> Result<(), W::Error> {
        writer.field("epoch", self.epoch.as_ref())?;
        writer.field("interpolationAlgorithm", self.interpolation_algorithm.as_ref())?;
        writer.field("interpolationDegree", self.interpolation_degree.as_ref())?;
        writer.field("forwardExtrapolationType", self.forward_extrapolation_type.as_ref())?;
        writer.field(
            "forwardExtrapolationDuration",
            self.forward_extrapolation_duration.as_ref(),
        )?;
        writer.field("backwardExtrapolationType", self.backward_extrapolation_type.as_ref())?;
        writer.field(
            "backwardExtrapolationDuration",
            self.backward_extrapolation_duration.as_ref(),
        )
    }
}

/// Setters of the [`Deletable`] group.
pub trait DeletableExt: WithFields<Deletable> {
    /// Mark the property as deleted. A deleted property serializes as
    /// `{"delete": true}` whatever else it holds.
    fn delete(mut self, delete: bool) -> Self {
        <Self as WithFields<Deletable>>::fields_mut(&mut self).delete = Some(delete);
        self
    }
}

impl<T: WithFields<Deletable>> DeletableExt for T {}

/// Setters of the [`Interpolatable`] group.
pub trait InterpolatableExt: WithFields<Interpolatable> {
    /// Epoch of sample times given in seconds.
    fn epoch(mut self, epoch: impl Into<Timestamp>) -> Self {
        group(&mut self).epoch = Some(epoch.into());
        self
    }

    fn interpolation_algorithm(mut self, algorithm: InterpolationAlgorithm) -> Self {
        group(&mut self).interpolation_algorithm = Some(algorithm);
        self
    }

    fn interpolation_degree(mut self, degree: u32) -> Self {
        group(&mut self).interpolation_degree = Some(degree);
        self
    }

    fn forward_extrapolation_type(mut self, extrapolation: ExtrapolationType) -> Self {
        group(&mut self).forward_extrapolation_type = Some(extrapolation);
        self
    }

    /// Seconds past the last sample during which extrapolation applies.
    fn forward_extrapolation_duration(mut self, seconds: impl Into<Number>) -> Self {
        group(&mut self).forward_extrapolation_duration = Some(seconds.into());
        self
    }

    fn backward_extrapolation_type(mut self, extrapolation: ExtrapolationType) -> Self {
        group(&mut self).backward_extrapolation_type = Some(extrapolation);
        self
    }

    /// Seconds before the first sample during which extrapolation applies.
    fn backward_extrapolation_duration(mut self, seconds: impl Into<Number>) -> Self {
        group(&mut self).backward_extrapolation_duration = Some(seconds.into());
        self
    }
}

impl<T: WithFields<Interpolatable>> InterpolatableExt for T {}

fn group<T: WithFields<Interpolatable>>(builder: &mut T) -> &mut Interpolatable {
    builder.fields_mut()
}
