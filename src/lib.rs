/*!
This library generates space-filling designs of experiments (DoE) for
continuous variables with bounds and relative importance weights.

A design is a table of sample points to run as experiments. Two generation
modes are available:
* [Random]: points are drawn independently and uniformly within bounds, a
  fast unweighted baseline,
* [Maxmin]: points are selected from a full-factorial candidate grid to
  maximize the minimum pairwise importance-weighted distance of the design
  (the [maximin criterion](https://en.wikipedia.org/wiki/Latin_hypercube_sampling)
  of space-filling designs), used when experiments are expensive and must be
  spread out in variable space.

The variable space is defined by an ordered list of [Variable] descriptors
gathered in a [DesignSpace]; importance weights scale each variable's axis
in the distance metric, so the maxmin selection spreads preferentially along
highly weighted variables.

Example:
```
use spacefilling::{generate, DesignSpace, Mode, Variable};

let space = DesignSpace::new(vec![
    Variable::new("h2o", 1.0, 6.0).with_label("Water").with_unit("ml"),
    Variable::new("temperature", 100.0, 200.0).with_unit("C"),
    Variable::new("time", 2.0, 60.0).with_weight(2.0).with_unit("min"),
]).unwrap();

// A 10-point maximin design over a 5-level grid per variable
let table = generate(Mode::Maxmin, &space, 10, 5).unwrap();
assert_eq!(table.n_samples(), 10);

// Or a plain uniform random table
let table = generate(Mode::Uniform, &space, 10, 5).unwrap();
assert_eq!(table.n_samples(), 10);
```

Each request is one-shot, synchronous and stateless: nothing is cached or
carried across calls, so concurrent requests need no coordination. The
maxmin candidate space holds `resolution^nx` points and is capped
([DEFAULT_MAX_CANDIDATES]); oversized requests fail with
[DoeError::ResourceExceeded] so callers can trade off variable count,
resolution and sample count explicitly.
*/
#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
mod errors;
mod generate;
mod grid;
mod maxmin;
mod random;
mod traits;
mod utils;
mod variable;

pub use errors::*;
pub use generate::*;
pub use grid::*;
pub use maxmin::*;
pub use random::*;
pub use traits::*;
pub use utils::*;
pub use variable::*;
