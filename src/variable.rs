use crate::errors::{DoeError, Result};
use linfa::Float;
use ndarray::{Array1, Array2};

#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};

/// A continuous design variable: an identifier, a definition interval
/// and an importance weight.
///
/// The weight acts as a scale factor on the variable axis in the
/// [weighted distance](crate::wdist) used by the maxmin selection:
/// a higher weight makes a design spread preferentially along this variable.
/// A weight of 0 removes the variable from the distance metric without
/// removing it from sampling. Defaults to 1.
///
/// ```
/// use spacefilling::Variable;
///
/// let var = Variable::new("temperature", 100.0, 200.0)
///     .with_unit("C")
///     .with_weight(2.0);
/// assert_eq!(var.describe(), "temperature [C]");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct Variable<F: Float> {
    id: String,
    label: Option<String>,
    unit: Option<String>,
    lower: F,
    upper: F,
    weight: F,
}

impl<F: Float> Variable<F> {
    /// Constructor given an identifier and the `[lower, upper]` definition interval,
    /// with a default weight of 1 and no label nor unit.
    pub fn new(id: impl Into<String>, lower: F, upper: F) -> Self {
        Variable {
            id: id.into(),
            label: None,
            unit: None,
            lower,
            upper,
            weight: F::one(),
        }
    }

    /// Sets the importance weight
    pub fn with_weight(mut self, weight: F) -> Self {
        self.weight = weight;
        self
    }

    /// Sets a human-readable label used by [Variable::describe]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets a unit used by [Variable::describe]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Identifier, the column name of this variable in a sample table
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Optional human-readable label
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Optional unit
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    /// Lower bound of the definition interval
    pub fn lower(&self) -> F {
        self.lower
    }

    /// Upper bound of the definition interval
    pub fn upper(&self) -> F {
        self.upper
    }

    /// Importance weight
    pub fn weight(&self) -> F {
        self.weight
    }

    /// Display name: `label [unit]`, falling back to the identifier when unlabeled
    pub fn describe(&self) -> String {
        let name = self.label.as_deref().unwrap_or(&self.id);
        match &self.unit {
            Some(unit) => format!("{name} [{unit}]"),
            None => name.to_string(),
        }
    }

    fn check(&self) -> Result<()> {
        if !(self.lower.is_finite() && self.upper.is_finite()) {
            return Err(DoeError::InvalidConfiguration(format!(
                "variable '{}': bounds must be finite, got [{}, {}]",
                self.id, self.lower, self.upper
            )));
        }
        if self.lower > self.upper {
            return Err(DoeError::InvalidConfiguration(format!(
                "variable '{}': lower bound {} exceeds upper bound {}",
                self.id, self.lower, self.upper
            )));
        }
        if !self.weight.is_finite() || self.weight < F::zero() {
            return Err(DoeError::InvalidConfiguration(format!(
                "variable '{}': weight must be finite and >= 0, got {}",
                self.id, self.weight
            )));
        }
        Ok(())
    }
}

/// The ordered list of active design variables.
///
/// Variable order defines the coordinate order of every sample point and
/// the column order of generated tables. Construction validates every
/// variable and fails fast with [DoeError::InvalidConfiguration] naming
/// the offending variable, so samplers can assume a well-formed space.
///
/// ```
/// use spacefilling::{DesignSpace, Variable};
///
/// let space = DesignSpace::new(vec![
///     Variable::new("h2o", 1.0, 6.0),
///     Variable::new("temperature", 100.0, 200.0),
/// ]).unwrap();
/// assert_eq!(space.nx(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct DesignSpace<F: Float> {
    variables: Vec<Variable<F>>,
}

impl<F: Float> DesignSpace<F> {
    /// Constructor given the ordered variable list.
    ///
    /// Fails with [DoeError::InvalidConfiguration] when the list is empty,
    /// an identifier is duplicated, a bound is not finite, an interval is
    /// inverted or a weight is negative or not finite.
    pub fn new(variables: Vec<Variable<F>>) -> Result<Self> {
        if variables.is_empty() {
            return Err(DoeError::InvalidConfiguration(
                "at least one variable is required".to_string(),
            ));
        }
        for (i, var) in variables.iter().enumerate() {
            var.check()?;
            if variables[..i].iter().any(|prev| prev.id == var.id) {
                return Err(DoeError::InvalidConfiguration(format!(
                    "variable '{}': duplicate identifier",
                    var.id
                )));
            }
        }
        Ok(DesignSpace { variables })
    }

    /// Number of variables, the dimension of the sample space
    pub fn nx(&self) -> usize {
        self.variables.len()
    }

    /// The variables in order
    pub fn variables(&self) -> &[Variable<F>] {
        &self.variables
    }

    /// Variable identifiers in order
    pub fn ids(&self) -> Vec<&str> {
        self.variables.iter().map(|v| v.id.as_str()).collect()
    }

    /// Bounds as a (nx, 2) matrix where the ith row is the
    /// `[lower_bound, upper_bound]` of the ith variable
    pub fn xlimits(&self) -> Array2<F> {
        let mut xlimits = Array2::zeros((self.variables.len(), 2));
        for (i, var) in self.variables.iter().enumerate() {
            xlimits[[i, 0]] = var.lower;
            xlimits[[i, 1]] = var.upper;
        }
        xlimits
    }

    /// Importance weights aligned with the variable order
    pub fn weights(&self) -> Array1<F> {
        self.variables.iter().map(|v| v.weight).collect()
    }
}
