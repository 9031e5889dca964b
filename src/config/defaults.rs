//! Default values for fair-audit configuration.

/// Per-request HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Datasets audited concurrently; 1 keeps the run sequential
pub const DEFAULT_JOBS: usize = 1;

/// Directory receiving the per-dataset report files
pub const DEFAULT_REPORT_DIR: &str = "reports";

/// Name of the application directory under the platform cache dir
pub const CACHE_DIR_NAME: &str = "fair-audit";

/// Sample of data.gov datasets audited when no URL is given.
pub const DEFAULT_CATALOG_URLS: &[&str] = &[
    "https://catalog.data.gov/dataset/death-rates-for-suicide-by-sex-race-hispanic-origin-and-age-united-states-020c1",
    "https://catalog.data.gov/dataset/drug-overdose-death-rates-by-drug-type-sex-age-race-and-hispanic-origin-united-states-3f72f",
    "https://catalog.data.gov/dataset/drug-use-data-from-selected-hospitals-26ee4",
    "https://catalog.data.gov/dataset/electric-vehicle-population-size-history-by-county",
    "https://catalog.data.gov/dataset/health-conditions-among-children-under-age-18-by-selected-characteristics-united-states-53b56",
    "https://catalog.data.gov/dataset/lottery-mega-millions-winning-numbers-beginning-2002",
    "https://catalog.data.gov/dataset/mental-health-care-in-the-last-4-weeks",
    "https://catalog.data.gov/dataset/meteorite-landings",
    "https://catalog.data.gov/dataset/nchs-leading-causes-of-death-united-states",
    "https://catalog.data.gov/dataset/school-attendance-by-student-group-and-district-2021-2022",
    "https://catalog.data.gov/dataset/street-names",
    "https://catalog.data.gov/dataset/2010-census-populations-by-zip-code",
    "https://catalog.data.gov/dataset/abs-store-inventory-and-sale-items",
    "https://catalog.data.gov/dataset/dataset-inventory",
    "https://catalog.data.gov/dataset/percent-of-covid-19-vaccine-recipients-who-live-in-a-svi-priority-zip-code-cumulative-and-",
    "https://catalog.data.gov/dataset/underground-storage-tanks-usts-facility-and-tank-details",
    "https://catalog.data.gov/dataset/post-covid-conditions-89bb3",
    "https://catalog.data.gov/dataset/u-s-life-expectancy-at-birth-by-state-and-census-tract-2010-2015",
    "https://catalog.data.gov/dataset/somerville-happiness-survey-responses",
    "https://catalog.data.gov/dataset/monthly-counts-of-deaths-by-select-causes-2014-2019-da9df",
    "https://catalog.data.gov/dataset/school-neighborhood-poverty-estimates-current",
    "https://catalog.data.gov/dataset/nchs-death-rates-and-life-expectancy-at-birth",
    "https://catalog.data.gov/dataset/nutrition-physical-activity-and-obesity-youth-risk-behavior-surveillance-system",
    "https://catalog.data.gov/dataset/borough-boundaries",
    "https://catalog.data.gov/dataset/supply-chain-shipment-pricing-data-07d29",
];
