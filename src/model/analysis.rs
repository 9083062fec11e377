//! Place analysis record: period, area, collected metrics, screenshots and
//! the metadata shown in report headers and footers.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisType {
    Monthly,
    Comparative,
    EventImpact,
    Timeline,
    Media,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    Month,
    Quarter,
    Year,
    Custom,
}

/// Top-level document stored as `analyser/<id>.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceAnalysis {
    pub id: String,
    pub title: String,
    pub analysis_type: AnalysisType,
    pub period: TimePeriod,
    pub area: AreaDefinition,
    #[serde(rename = "plaaceData")]
    pub place_data: PlaceMetrics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparisons: Option<Vec<ComparisonData>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<EventReference>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<MediaReference>>,
    pub metadata: AnalysisMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimePeriod {
    #[serde(rename = "type")]
    pub kind: PeriodType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u8>,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quarter: Option<u8>,
    pub start_date: String,
    pub end_date: String,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaKind {
    District,
    Neighborhood,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaDefinition {
    pub id: String,
    pub name: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub kind: AreaKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundaries: Option<GeoJson>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_areas: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeometryType {
    Polygon,
    MultiPolygon,
}

/// Area boundary. Coordinates nest three levels for a polygon and four for a
/// multi-polygon, so they are kept as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoJson {
    #[serde(rename = "type")]
    pub kind: GeometryType,
    pub coordinates: serde_json::Value,
}

/// Metrics exported from the analytics provider (`plaaceData`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceMetrics {
    #[serde(rename = "rapportDato")]
    pub report_date: String,
    #[serde(rename = "datakilder")]
    pub data_sources: Vec<String>,
    #[serde(default)]
    pub screenshots: Vec<ScreenshotData>,
    #[serde(rename = "nokkeldata")]
    pub key_metrics: KeyMetrics,
    #[serde(rename = "demografi", default, skip_serializing_if = "Option::is_none")]
    pub demographics: Option<DemographicMetrics>,
    #[serde(rename = "marked", default, skip_serializing_if = "Option::is_none")]
    pub market: Option<MarketMetrics>,
    #[serde(rename = "bevegelse", default, skip_serializing_if = "Option::is_none")]
    pub movement: Option<MovementMetrics>,
    #[serde(
        rename = "sosiodemografi",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sociodemographics: Option<SociodemographicMetrics>,
}

/// Screenshot gallery category. Unknown categories fall into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum ScreenshotCategory {
    #[serde(rename = "oversikt")]
    Overview,
    #[serde(rename = "demografi")]
    Demographics,
    #[serde(rename = "marked")]
    Market,
    #[serde(rename = "bevegelse")]
    Movement,
    #[serde(rename = "sosiodemografi")]
    Sociodemographics,
    #[serde(rename = "konkurranse")]
    Competition,
    #[serde(rename = "korthandel")]
    CardSpending,
    #[serde(rename = "besokende")]
    Visitors,
    #[serde(rename = "internasjonal")]
    International,
    #[serde(rename = "utvikling")]
    Development,
    #[serde(rename = "annet")]
    Other,
}

impl From<String> for ScreenshotCategory {
    fn from(key: String) -> Self {
        Self::from_key(&key)
    }
}

impl ScreenshotCategory {
    pub const ALL: [ScreenshotCategory; 11] = [
        Self::Overview,
        Self::Demographics,
        Self::Market,
        Self::Movement,
        Self::Sociodemographics,
        Self::Competition,
        Self::CardSpending,
        Self::Visitors,
        Self::International,
        Self::Development,
        Self::Other,
    ];

    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.key() == key)
            .unwrap_or(Self::Other)
    }

    /// The key used in the JSON documents.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Overview => "oversikt",
            Self::Demographics => "demografi",
            Self::Market => "marked",
            Self::Movement => "bevegelse",
            Self::Sociodemographics => "sosiodemografi",
            Self::Competition => "konkurranse",
            Self::CardSpending => "korthandel",
            Self::Visitors => "besokende",
            Self::International => "internasjonal",
            Self::Development => "utvikling",
            Self::Other => "annet",
        }
    }

    /// Heading used when the category is rendered as a report section.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Demographics => "Demographics",
            Self::Market => "Market",
            Self::Movement => "Movement",
            Self::Sociodemographics => "Sociodemographics",
            Self::Competition => "Competitive landscape",
            Self::CardSpending => "Card spending",
            Self::Visitors => "Visitors",
            Self::International => "International visitors",
            Self::Development => "Development & trends",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ScreenshotCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenshotData {
    pub id: String,
    #[serde(rename = "filnavn")]
    pub file_name: String,
    pub path: String,
    #[serde(rename = "beskrivelse")]
    pub description: String,
    #[serde(rename = "kategori")]
    pub category: ScreenshotCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EducationLevels {
    #[serde(rename = "grunnskole")]
    pub primary: f64,
    #[serde(rename = "videregaende")]
    pub secondary: f64,
    #[serde(rename = "universitet")]
    pub university: f64,
}

/// Headline numbers shown as cards at the top of a report. Percentages are
/// stored as plain numbers (`3.2` meaning 3.2%).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyMetrics {
    #[serde(rename = "befolkning", default, skip_serializing_if = "Option::is_none")]
    pub population: Option<f64>,
    #[serde(
        rename = "befolkningVekst",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub population_growth: Option<f64>,
    #[serde(
        rename = "gjennomsnittsinntekt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub average_income: Option<f64>,
    #[serde(
        rename = "medianinntekt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub median_income: Option<f64>,
    #[serde(
        rename = "arbeidsledighet",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub unemployment: Option<f64>,
    #[serde(
        rename = "sysselsetting",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub employment: Option<f64>,
    #[serde(
        rename = "utdanningsniva",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub education: Option<EducationLevels>,
    #[serde(
        rename = "husholdninger",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub households: Option<f64>,
    #[serde(
        rename = "dagligTrafikk",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub daily_traffic: Option<f64>,
    #[serde(
        rename = "handelsomsetning",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub retail_turnover: Option<f64>,
    #[serde(rename = "besokende", default, skip_serializing_if = "Option::is_none")]
    pub visitors: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeDistribution {
    #[serde(rename = "0-17")]
    pub age_0_17: f64,
    #[serde(rename = "18-29")]
    pub age_18_29: f64,
    #[serde(rename = "30-49")]
    pub age_30_49: f64,
    #[serde(rename = "50-66")]
    pub age_50_66: f64,
    #[serde(rename = "67+")]
    pub age_67_plus: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseholdTypes {
    #[serde(rename = "aleneboende")]
    pub single: f64,
    #[serde(rename = "parUtenBarn")]
    pub couple_without_children: f64,
    #[serde(rename = "parMedBarn")]
    pub couple_with_children: f64,
    #[serde(rename = "ensligForeldere")]
    pub single_parents: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicMetrics {
    #[serde(rename = "totalBefolkning")]
    pub total_population: f64,
    #[serde(rename = "befolkningsutvikling")]
    pub population_change: f64,
    #[serde(rename = "aldersfordeling")]
    pub age_distribution: AgeDistribution,
    #[serde(rename = "husstandsstorrelse")]
    pub household_size: f64,
    #[serde(
        rename = "innvandrerandel",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub immigrant_share: Option<f64>,
    #[serde(
        rename = "familietyper",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub household_types: Option<HouseholdTypes>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessShare {
    #[serde(rename = "kategori")]
    pub category: String,
    #[serde(rename = "antall")]
    pub count: u32,
    #[serde(rename = "omsetning", default, skip_serializing_if = "Option::is_none")]
    pub turnover: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketMetrics {
    #[serde(rename = "omsetning", default, skip_serializing_if = "Option::is_none")]
    pub turnover: Option<f64>,
    #[serde(
        rename = "omsetningVekst",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub turnover_growth: Option<f64>,
    #[serde(
        rename = "transaksjoner",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub transactions: Option<f64>,
    #[serde(
        rename = "prisutviklingProsent",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub price_change_percent: Option<f64>,
    #[serde(
        rename = "kvadratmeterpris",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub price_per_square_meter: Option<f64>,
    #[serde(
        rename = "leieprisKvadratmeter",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub rent_per_square_meter: Option<f64>,
    #[serde(
        rename = "antallVirksomheter",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub business_count: Option<u32>,
    #[serde(
        rename = "virksomhetsfordeling",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub business_breakdown: Option<Vec<BusinessShare>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisitPattern {
    #[serde(rename = "ukedag")]
    pub weekday: f64,
    #[serde(rename = "helg")]
    pub weekend: f64,
}

/// Dwell time in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DwellTime {
    #[serde(rename = "gjennomsnitt")]
    pub mean: f64,
    pub median: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovementMetrics {
    #[serde(
        rename = "dagligTrafikk",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub daily_traffic: Option<f64>,
    #[serde(
        rename = "toppTrafikktimer",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub peak_hours: Option<Vec<String>>,
    #[serde(rename = "gangTrafikk", default, skip_serializing_if = "Option::is_none")]
    pub pedestrian_traffic: Option<f64>,
    #[serde(
        rename = "sykkelTrafikk",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub bicycle_traffic: Option<f64>,
    #[serde(
        rename = "kollektivtrafikk",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub public_transport: Option<f64>,
    #[serde(
        rename = "besoksmønster",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub visit_pattern: Option<VisitPattern>,
    #[serde(rename = "oppholdstid", default, skip_serializing_if = "Option::is_none")]
    pub dwell_time: Option<DwellTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncomeQuartiles {
    #[serde(rename = "kvartil1")]
    pub q1: f64,
    #[serde(rename = "kvartil2")]
    pub q2: f64,
    #[serde(rename = "kvartil3")]
    pub q3: f64,
    #[serde(rename = "kvartil4")]
    pub q4: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EducationBreakdown {
    #[serde(rename = "grunnskole")]
    pub primary: f64,
    #[serde(rename = "videregaende")]
    pub secondary: f64,
    pub bachelor: f64,
    pub master: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupationShare {
    #[serde(rename = "kategori")]
    pub category: String,
    #[serde(rename = "andel")]
    pub share: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SociodemographicMetrics {
    #[serde(
        rename = "inntektsfordeling",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub income_distribution: Option<IncomeQuartiles>,
    #[serde(
        rename = "utdanningsnivå",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub education: Option<EducationBreakdown>,
    #[serde(
        rename = "yrkesfordeling",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub occupations: Option<Vec<OccupationShare>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonKind {
    Area,
    Temporal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonTarget {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AreaKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricComparison {
    pub metric: String,
    pub baseline: f64,
    pub comparison: f64,
    pub difference: f64,
    pub percentage_difference: f64,
}

/// Comparison against another area or an earlier period.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonData {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ComparisonKind,
    pub compare_with: ComparisonTarget,
    pub metrics: Vec<MetricComparison>,
    pub summary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Cultural,
    Commercial,
    Infrastructure,
    Social,
    Policy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventReference {
    pub id: String,
    pub title: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact_level: Option<ImpactLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaReference {
    pub id: String,
    pub title: String,
    pub source: String,
    pub publish_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisStatus {
    #[serde(rename = "utkast")]
    Draft,
    #[serde(rename = "publisert")]
    Published,
    #[serde(rename = "arkivert")]
    Archived,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    #[serde(rename = "opprettet")]
    pub created: String,
    #[serde(rename = "sistOppdatert")]
    pub last_updated: String,
    pub status: AnalysisStatus,
    #[serde(rename = "versjon")]
    pub version: u32,
    #[serde(rename = "forfatter", default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(rename = "kilde", default)]
    pub sources: Vec<String>,
    #[serde(rename = "notater", default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
    #[serde(rename = "heroImage", default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSeriesDataPoint {
    pub date: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
    Volatile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendAnalysis {
    pub metric: String,
    pub data_points: Vec<TimeSeriesDataPoint>,
    pub trend: TrendDirection,
    pub change_percentage: f64,
    pub summary: String,
}
