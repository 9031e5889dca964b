//! Fixed allow-lists of format tags.

/// Open, non-proprietary file format tags
pub const NON_PROPRIETARY_FORMATS: &[&str] = &[
    "BMP",
    "CSV",
    "DBF",
    "GEOJSON",
    "GZIP",
    "HTML",
    "ICS",
    "JPEG2000",
    "JSON",
    "JSON_LD",
    "KML",
    "KMZ",
    "NETCDF",
    "ODS",
    "PNG",
    "RDF",
    "RDF_N_QUADS",
    "RDF_N_TRIPLES",
    "RDF_TRIG",
    "RDF_TURTLE",
    "RDF_XML",
    "RSS",
    "RTF",
    "TAR",
    "TIFF",
    "TSV",
    "TXT",
    "WMS_SRVC",
    "XML",
    "ZIP",
];

/// Format tags a program can parse without human interpretation
pub const MACHINE_READABLE_FORMATS: &[&str] = &[
    "CSV",
    "GEOJSON",
    "ICS",
    "JSON",
    "JSON_LD",
    "KML",
    "KMZ",
    "NETCDF",
    "ODS",
    "RDF",
    "RDFA",
    "RDF_N_QUADS",
    "RDF_N_TRIPLES",
    "RDF_TRIG",
    "RDF_TURTLE",
    "RDF_XML",
    "RSS",
    "SHP",
    "XLS",
    "XLSX",
    "XML",
];

/// Controlled vocabulary for the "Public Access Level" field
pub const ACCESS_RIGHTS_VOCABULARY: &[&str] = &[
    "confidential",
    "non-public",
    "public",
    "restricted",
    "sensitive",
];

/// Whether `formats` is non-empty and every entry is in `allowed`.
///
/// Matching is exact: catalogs publish upper-case tags.
pub(crate) fn all_in(formats: &[String], allowed: &[&str]) -> bool {
    !formats.is_empty() && formats.iter().all(|f| allowed.contains(&f.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_sizes() {
        assert_eq!(NON_PROPRIETARY_FORMATS.len(), 30);
        assert_eq!(MACHINE_READABLE_FORMATS.len(), 21);
    }

    #[test]
    fn test_all_in() {
        let csv = vec!["CSV".to_string()];
        assert!(all_in(&csv, NON_PROPRIETARY_FORMATS));
        assert!(!all_in(&[], NON_PROPRIETARY_FORMATS));

        let mixed = vec!["CSV".to_string(), "PDF".to_string()];
        assert!(!all_in(&mixed, NON_PROPRIETARY_FORMATS));

        let lower = vec!["csv".to_string()];
        assert!(!all_in(&lower, MACHINE_READABLE_FORMATS));
    }
}
