use crate::error::ParameterError;

/// Rejects NaN and infinite values.
pub(crate) fn require_finite(parameter: &'static str, value: f64) -> Result<(), ParameterError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::NotFinite { parameter, value })
    }
}

/// Rejects values that are not finite and strictly positive.
pub(crate) fn require_positive(parameter: &'static str, value: f64) -> Result<(), ParameterError> {
    require_finite(parameter, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ParameterError::NotPositive { parameter, value })
    }
}

/// Inputs of the planar builders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleParams {
    /// Extent along X, starting at `x = 0`.
    pub width: f64,
    /// Extent along Y, centered on `center_z`.
    pub height: f64,
    /// Target element size, attached to every point.
    pub mesh_size: f64,
    /// Vertical center of the rectangle.
    pub center_z: f64,
}

impl RectangleParams {
    /// Parameters for a rectangle centered on `y = 0`.
    #[must_use]
    pub fn new(width: f64, height: f64, mesh_size: f64) -> Self {
        Self {
            width,
            height,
            mesh_size,
            center_z: 0.0,
        }
    }

    /// Moves the rectangle's vertical center.
    #[must_use]
    pub fn with_center_z(mut self, center_z: f64) -> Self {
        self.center_z = center_z;
        self
    }

    /// Checks every parameter.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] naming the first offending parameter.
    pub fn validate(&self) -> Result<(), ParameterError> {
        require_positive("width", self.width)?;
        require_positive("height", self.height)?;
        require_positive("mesh_size", self.mesh_size)?;
        require_finite("center_z", self.center_z)
    }
}

/// Inputs of the prism builder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrismParams {
    /// Extent along X, starting at `x = 0`.
    pub width: f64,
    /// Extent along Y, starting at `y = 0`.
    pub height: f64,
    /// Extent along Z, centered on `center_z`.
    pub thickness: f64,
    /// Target element size, attached to every point.
    pub mesh_size: f64,
    /// Center of the prism along Z.
    pub center_z: f64,
}

impl PrismParams {
    /// Parameters for a prism centered on `z = 0`.
    #[must_use]
    pub fn new(width: f64, height: f64, thickness: f64, mesh_size: f64) -> Self {
        Self {
            width,
            height,
            thickness,
            mesh_size,
            center_z: 0.0,
        }
    }

    /// Moves the prism's center along Z.
    #[must_use]
    pub fn with_center_z(mut self, center_z: f64) -> Self {
        self.center_z = center_z;
        self
    }

    /// Checks every parameter.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] naming the first offending parameter.
    pub fn validate(&self) -> Result<(), ParameterError> {
        require_positive("width", self.width)?;
        require_positive("height", self.height)?;
        require_positive("thickness", self.thickness)?;
        require_positive("mesh_size", self.mesh_size)?;
        require_finite("center_z", self.center_z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_rectangle() {
        assert!(RectangleParams::new(2.0, 1.0, 0.1)
            .with_center_z(-3.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn each_rectangle_dimension_is_checked() {
        for (params, name) in [
            (RectangleParams::new(-1.0, 1.0, 0.1), "width"),
            (RectangleParams::new(1.0, 0.0, 0.1), "height"),
            (RectangleParams::new(1.0, 1.0, -0.1), "mesh_size"),
        ] {
            match params.validate() {
                Err(ParameterError::NotPositive { parameter, .. }) => assert_eq!(parameter, name),
                other => panic!("expected {name} to be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(matches!(
            RectangleParams::new(f64::NAN, 1.0, 0.1).validate(),
            Err(ParameterError::NotFinite { parameter: "width", .. })
        ));
        assert!(matches!(
            RectangleParams::new(1.0, 1.0, 0.1)
                .with_center_z(f64::INFINITY)
                .validate(),
            Err(ParameterError::NotFinite { parameter: "center_z", .. })
        ));
    }

    #[test]
    fn prism_thickness_is_checked() {
        assert!(PrismParams::new(1.0, 1.0, 1.0, 0.2).validate().is_ok());
        assert!(matches!(
            PrismParams::new(1.0, 1.0, 0.0, 0.2).validate(),
            Err(ParameterError::NotPositive { parameter: "thickness", .. })
        ));
    }
}
