use engine::{recommend, Catalog, FeatureIndex};
use std::io::Cursor;
use std::io::Write;

const SAMPLE_CSV: &str = "\
Unnamed: 0,Movie,Overview,Genre,Certificate,Year,Runtime,Rating,No.of.Ratings
0,Alpha,A brave hero saves the village,Action,U,2001,120 min,7.1,1042
1,Beta,A brave hero saves the kingdom,Action,UA,2003,115 min,6.9,877
2,Gamma,\"A romantic comedy about two chefs, set in Goa\",Romance,U,2010,128 min,7.4,2310
";

#[test]
fn loads_records_in_file_order() {
    let catalog = Catalog::from_reader(Cursor::new(SAMPLE_CSV)).unwrap();
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.position("Alpha"), Some(0));
    assert_eq!(catalog.position("Gamma"), Some(2));

    let gamma = catalog.get("Gamma").unwrap();
    // Quoted comma survives parsing.
    assert_eq!(gamma.overview, "A romantic comedy about two chefs, set in Goa");
    assert_eq!(gamma.genre, "Romance");
    assert_eq!(gamma.rating, "7.4");
    assert_eq!(gamma.rating_count, "2310");
}

#[test]
fn header_whitespace_is_trimmed() {
    let csv = "\
 Movie , Overview ,Genre,Certificate,Year,Runtime,Rating, No.of.Ratings \n\
Alpha,a hero,Action,U,2001,120 min,7.1,1042\n";
    let catalog = Catalog::from_reader(Cursor::new(csv)).unwrap();
    assert_eq!(catalog.len(), 1);
    let alpha = catalog.get("Alpha").unwrap();
    assert_eq!(alpha.overview, "a hero");
    assert_eq!(alpha.rating_count, "1042");
}

#[test]
fn malformed_rows_are_skipped_not_fatal() {
    let csv = "\
Movie,Overview,Genre,Certificate,Year,Runtime,Rating,No.of.Ratings\n\
Alpha,a hero,Action,U,2001,120 min,7.1,1042\n\
Broken,row,with,far,too,many,fields,here,extra,extra\n\
Beta,a villain,Action,U,2002,110 min,6.5,200\n";
    let catalog = Catalog::from_reader(Cursor::new(csv)).unwrap();
    assert_eq!(catalog.len(), 2);
    assert!(catalog.get("Alpha").is_some());
    assert!(catalog.get("Beta").is_some());
}

#[test]
fn missing_metadata_columns_default_to_empty() {
    let csv = "Movie,Overview\nAlpha,a hero\n";
    let catalog = Catalog::from_reader(Cursor::new(csv)).unwrap();
    let alpha = catalog.get("Alpha").unwrap();
    assert_eq!(alpha.genre, "");
    assert_eq!(alpha.year, "");
}

#[test]
fn missing_file_is_fatal() {
    assert!(Catalog::from_csv_path("/nonexistent/movies_data.csv").is_err());
}

#[test]
fn loads_from_disk_and_recommends_end_to_end() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_CSV.as_bytes()).unwrap();
    file.flush().unwrap();

    let catalog = Catalog::from_csv_path(file.path()).unwrap();
    let index = FeatureIndex::build(&catalog);
    let recs = recommend("Alpha", &catalog, &index, 2).unwrap();
    assert_eq!(recs[0].title, "Beta");
    assert!(recs.iter().all(|r| r.title != "Alpha"));
}
