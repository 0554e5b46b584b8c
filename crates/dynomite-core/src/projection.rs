//! Document → samples.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::sample::Sample;
use crate::status::StatusDocument;

/// Emit one sample per `(family, type)` in catalog order, labelled with the
/// document's rack.
///
/// Only already-decoded scalars are read, so the single failure mode is a
/// family whose table entry disagrees with its declared label schema.
pub fn project(catalog: &Catalog, doc: &StatusDocument) -> Result<Vec<Sample>> {
    let mut out = Vec::with_capacity(catalog.sample_count());
    for (def, family) in catalog.families() {
        for series in family.series {
            let mut values = vec![doc.rack.clone()];
            if let Some(ty) = series.type_label {
                values.push(ty.to_string());
            }
            out.push(Sample::new(def, (series.field)(doc) as f64, values)?);
        }
    }
    Ok(out)
}
