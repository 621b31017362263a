//! NetCDF persistence for soil datasets.
//!
//! Output layout follows CF conventions: one `f32` variable per soil
//! property over (y, x), coordinate variables holding WGS84 cell centers,
//! and NaN as the missing-value marker.

use std::path::Path;

use chrono::Utc;

use crate::dataset::SoilDataset;
use crate::error::AcquisitionResult;

/// Write a dataset to a NetCDF file, replacing any existing file.
pub fn write_dataset(dataset: &SoilDataset, path: &Path) -> AcquisitionResult<()> {
    let mut file = netcdf::create(path)?;

    file.add_dimension("y", dataset.height())?;
    file.add_dimension("x", dataset.width())?;

    let bounds = dataset.bounds();
    let x_coords = cell_centers(bounds.west, bounds.east, dataset.width());
    // Rows run north to south, matching the raster layout
    let y_coords = cell_centers(bounds.north, bounds.south, dataset.height());

    {
        let mut x_var = file.add_variable::<f64>("x", &["x"])?;
        x_var.put_attribute("standard_name", "longitude")?;
        x_var.put_attribute("long_name", "longitude")?;
        x_var.put_attribute("units", "degrees_east")?;
        x_var.put_values(&x_coords, ..)?;
    }

    {
        let mut y_var = file.add_variable::<f64>("y", &["y"])?;
        y_var.put_attribute("standard_name", "latitude")?;
        y_var.put_attribute("long_name", "latitude")?;
        y_var.put_attribute("units", "degrees_north")?;
        y_var.put_values(&y_coords, ..)?;
    }

    for (variable, layer) in dataset.iter() {
        let mut var = file.add_variable::<f32>(variable.id(), &["y", "x"])?;
        var.put_attribute("long_name", variable.long_name())?;
        var.put_attribute("units", variable.units())?;
        var.put_attribute("_FillValue", f32::NAN)?;
        var.put_values(&layer.data, ..)?;
    }

    file.add_attribute("Conventions", "CF-1.8")?;
    file.add_attribute("title", "SoilGrids soil properties, 0-60cm depth-weighted averages")?;
    file.add_attribute("source", "ISRIC SoilGrids web coverage service")?;

    let now = Utc::now();
    file.add_attribute(
        "history",
        format!(
            "{}: Created by soilgrids-fetch",
            now.format("%Y-%m-%d %H:%M:%S UTC")
        )
        .as_str(),
    )?;

    Ok(())
}

/// Coordinates of cell centers across one axis.
///
/// `start` is the edge of the first row/column, `end` the edge of the
/// last; a descending axis just swaps them.
fn cell_centers(start: f64, end: f64, count: usize) -> Vec<f64> {
    let step = (end - start) / count as f64;
    (0..count)
        .map(|i| start + (i as f64 + 0.5) * step)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use soil_common::{GeoBounds, RasterLayer, SoilVariable};
    use test_utils::create_constant_layer;

    fn test_bounds() -> GeoBounds {
        GeoBounds::new(-6.5, 8.75, 47.9, 62.3)
    }

    #[test]
    fn test_cell_centers_are_midpoints() {
        let xs = cell_centers(0.0, 10.0, 5);
        assert_eq!(xs, vec![1.0, 3.0, 5.0, 7.0, 9.0]);

        let ys = cell_centers(10.0, 0.0, 5);
        assert_eq!(ys, vec![9.0, 7.0, 5.0, 3.0, 1.0]);
    }

    #[test]
    fn test_write_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("soil.nc");

        let clay_data: Vec<f32> = (0..12).map(|i| i as f32 + 0.5).collect();
        let mut dataset = SoilDataset::new(test_bounds(), 4, 3);
        dataset
            .insert(
                SoilVariable::Clay,
                RasterLayer::from_data(clay_data.clone(), 4, 3).unwrap(),
            )
            .unwrap();
        dataset
            .insert(SoilVariable::Ocs, create_constant_layer(4, 3, 55.0))
            .unwrap();

        write_dataset(&dataset, &path).unwrap();

        let file = netcdf::open(&path).unwrap();
        assert_eq!(file.dimension("y").unwrap().len(), 3);
        assert_eq!(file.dimension("x").unwrap().len(), 4);

        let clay = file.variable("clay").unwrap();
        let values: Vec<f32> = clay.get_values(..).unwrap();
        assert_eq!(values, clay_data);

        let ocs = file.variable("ocs").unwrap();
        let values: Vec<f32> = ocs.get_values(..).unwrap();
        assert!(values.iter().all(|&v| v == 55.0));
    }

    #[test]
    fn test_coordinates_span_bounds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("soil.nc");

        let mut dataset = SoilDataset::new(test_bounds(), 4, 3);
        dataset
            .insert(SoilVariable::Bdod, create_constant_layer(4, 3, 1.0))
            .unwrap();
        write_dataset(&dataset, &path).unwrap();

        let file = netcdf::open(&path).unwrap();

        let xs: Vec<f64> = file.variable("x").unwrap().get_values(..).unwrap();
        assert_eq!(xs.len(), 4);
        assert!(xs[0] > -6.5 && xs[3] < 8.75, "centers stay inside bounds");
        assert!(xs.windows(2).all(|w| w[0] < w[1]), "x ascends west to east");

        let ys: Vec<f64> = file.variable("y").unwrap().get_values(..).unwrap();
        assert_eq!(ys.len(), 3);
        assert!(ys[0] < 62.3 && ys[2] > 47.9, "centers stay inside bounds");
        assert!(ys.windows(2).all(|w| w[0] > w[1]), "y descends north to south");
    }

    #[test]
    fn test_cf_attributes_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("soil.nc");

        let mut dataset = SoilDataset::new(test_bounds(), 2, 2);
        dataset
            .insert(SoilVariable::Clay, create_constant_layer(2, 2, 28.5))
            .unwrap();
        write_dataset(&dataset, &path).unwrap();

        let file = netcdf::open(&path).unwrap();

        let clay = file.variable("clay").unwrap();
        let units = clay.attribute_value("units").unwrap().unwrap();
        assert!(matches!(units, netcdf::AttributeValue::Str(ref s) if s == "%"));
        let long_name = clay.attribute_value("long_name").unwrap().unwrap();
        assert!(matches!(
            long_name,
            netcdf::AttributeValue::Str(ref s) if s == "Proportion of clay particles in the fine earth fraction"
        ));
        let fill = clay.attribute_value("_FillValue").unwrap().unwrap();
        assert!(f32::try_from(fill).unwrap().is_nan());

        let x = file.variable("x").unwrap();
        let x_units = x.attribute_value("units").unwrap().unwrap();
        assert!(matches!(x_units, netcdf::AttributeValue::Str(ref s) if s == "degrees_east"));

        for name in ["Conventions", "title", "source", "history"] {
            assert!(
                file.attributes().any(|attr| attr.name() == name),
                "missing global attribute {name}"
            );
        }
        let conventions = file
            .attributes()
            .find(|attr| attr.name() == "Conventions")
            .unwrap();
        assert!(matches!(
            conventions.value().unwrap(),
            netcdf::AttributeValue::Str(ref s) if s == "CF-1.8"
        ));
    }

    #[test]
    fn test_nan_cells_survive_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("soil.nc");

        let mut dataset = SoilDataset::new(test_bounds(), 2, 2);
        dataset
            .insert(
                SoilVariable::Soc,
                RasterLayer::from_data(vec![1.0, f32::NAN, 3.0, f32::NAN], 2, 2).unwrap(),
            )
            .unwrap();
        write_dataset(&dataset, &path).unwrap();

        let file = netcdf::open(&path).unwrap();
        let values: Vec<f32> = file.variable("soc").unwrap().get_values(..).unwrap();
        assert_eq!(values[0], 1.0);
        assert!(values[1].is_nan());
        assert_eq!(values[2], 3.0);
        assert!(values[3].is_nan());
    }
}
