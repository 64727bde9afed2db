#[allow(dead_code)]
mod common;

use std::io::Write;

use common::{catalog_content, test_config};
use skylist_core::output::render;
use skylist_core::query::{filter_stars, DistanceMetric, Query};
use tempfile::NamedTempFile;

fn write_catalog(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_file_to_rendered_short_list() {
    let content = catalog_content(&[
        "s5\t10.0\t10.0\t5.0",
        "s1\t11.0\t10.0\t1.0",
        "bad line",
        "s9\t10.5\t10.5\t9.0",
        "s3\t10.0\t11.0\t3.0",
        "s7\t11.0\t11.0\t7.0",
    ]);
    let file = write_catalog(&content);
    let config = test_config();
    let query = Query {
        center_ra: 10.5,
        center_dec: 10.5,
        fov_ra: 10.0,
        fov_dec: 10.0,
        count: 3,
        metric: DistanceMetric::Planar,
    };

    let result = filter_stars(file.path(), &config, &query).unwrap();
    assert_eq!(result.stats.lines_seen, 6);
    assert_eq!(result.stats.parse_failures, 1);
    assert_eq!(result.stars.len(), 3);
    assert_eq!(result.stars[0].id, "s9");

    let text = render(&result.stars, &config.layout).unwrap();
    assert!(text.starts_with("distance\tid\tra\tdec\tmagnitude\n"));
    assert_eq!(text.lines().count(), 4);
    assert!(text.lines().nth(1).unwrap().contains("s9"));
}

#[test]
fn test_rerun_produces_byte_identical_output() {
    let content = catalog_content(&[
        "a\t10.0\t10.0\t5.0",
        "b\t10.1\t10.1\t5.0",
        "c\t10.2\t10.2\t7.0",
        "d\t10.3\t10.3\t2.0",
    ]);
    let file = write_catalog(&content);
    let config = test_config();
    let query = Query {
        center_ra: 10.0,
        center_dec: 10.0,
        fov_ra: 5.0,
        fov_dec: 5.0,
        count: 3,
        metric: DistanceMetric::Planar,
    };

    let first = filter_stars(file.path(), &config, &query).unwrap();
    let second = filter_stars(file.path(), &config, &query).unwrap();
    let rendered_first = render(&first.stars, &config.layout).unwrap();
    let rendered_second = render(&second.stars, &config.layout).unwrap();
    assert_eq!(rendered_first, rendered_second);
}

#[test]
fn test_all_filtered_out_is_empty_not_error() {
    let content = catalog_content(&["a\t10.0\t10.0\t5.0"]);
    let file = write_catalog(&content);
    let config = test_config();
    let query = Query {
        center_ra: 200.0,
        center_dec: -40.0,
        fov_ra: 1.0,
        fov_dec: 1.0,
        count: 10,
        metric: DistanceMetric::Planar,
    };

    let result = filter_stars(file.path(), &config, &query).unwrap();
    assert!(result.stars.is_empty());
    assert_eq!(result.stats.outside_window, 1);
    assert!(render(&result.stars, &config.layout).is_err());
}
