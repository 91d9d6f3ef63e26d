//! Mapping lab result rows onto provider biomarkers.

use serde::Serialize;
use serde_json::Value;
use wellness_client::lab::{LabOrder, LabPatient, LabResult};
use wellness_client::units::UnitTable;
use wellness_client::{BiomarkerInput, BiomarkerReport, BiomarkerValue};

use super::messages::format_number;

/// Lab test code to provider biomarker id. Code 7573 is listed for both
/// triglycerides and TSH upstream; TSH is the mapping in effect.
pub fn biomarker_id(code: &str) -> Option<&'static str> {
    let id = match code {
        "4420" | "10124" => "crp_hs",
        "496" | "7788" | "4548" => "hba1c",
        "303" | "7600" => "cholesterol_total",
        "304" | "13457" => "cholesterol_ldl",
        "305" | "7596" => "cholesterol_hdl",
        "306" => "triglycerides",
        "866" | "1759" => "glucose",
        "7573" => "tsh",
        "899" => "vitamin_d",
        "571" => "vitamin_b12",
        "457" => "ferritin",
        "7444" => "cortisol",
        _ => return None,
    };
    Some(id)
}

/// One recognised measurement pulled out of an order's results.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedBiomarker {
    pub id: &'static str,
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub reference_range: String,
    pub abnormal_flag: String,
    pub observation_status: String,
    pub order_status: String,
    pub sending_facility: String,
    pub collection_date_time: Option<String>,
    pub result_date_time: Option<String>,
    #[serde(skip)]
    pub notes: Vec<Value>,
}

impl ParsedBiomarker {
    /// Flagged unless the flag is empty or "no".
    pub fn is_abnormal(&self) -> bool {
        let flag = self.abnormal_flag.trim();
        !flag.is_empty() && !flag.eq_ignore_ascii_case("no")
    }

    pub fn date(&self) -> Option<&str> {
        self.collection_date_time
            .as_deref()
            .or(self.result_date_time.as_deref())
    }

    pub fn display_value(&self) -> String {
        format!("{} {}", format_number(self.value), self.unit)
    }

    pub fn to_input(&self, units: &UnitTable) -> BiomarkerInput {
        let alert = self.is_abnormal();
        BiomarkerInput {
            biomarker_id: self.id.to_string(),
            biomarker_unit_id: units.resolve(&self.unit).map(str::to_string),
            result: BiomarkerValue {
                value: self.value,
                unit: self.unit.clone(),
            },
            date: self.date().map(str::to_string),
            alert,
            alert_text: alert
                .then(|| format!("{}: Outside range {}", self.abnormal_flag, self.reference_range)),
            display_value: self.display_value(),
        }
    }
}

/// Leading decimal number of `raw`, e.g. `"5.6 H"` -> `5.6`.
pub fn parse_value(raw: &str) -> Option<f64> {
    let s = raw.trim();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, ch) in s.char_indices() {
        match ch {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + ch.len_utf8();
    }
    if !seen_digit {
        return None;
    }
    s[..end].parse().ok().filter(|v: &f64| v.is_finite())
}

/// Recognised biomarkers across an order's results, in row order. Rows with
/// an unknown code or no numeric value are dropped.
pub fn parse_biomarkers(results: &[LabResult]) -> Vec<ParsedBiomarker> {
    let mut out = Vec::new();
    for result in results {
        for row in &result.rows {
            let Some(code) = row
                .test_name
                .as_deref()
                .filter(|s| !s.is_empty())
                .or(row.parent_result.as_deref())
            else {
                continue;
            };
            let Some(id) = biomarker_id(code) else {
                continue;
            };
            let Some(value) = row.value.as_deref().and_then(parse_value) else {
                continue;
            };
            out.push(ParsedBiomarker {
                id,
                name: code.to_string(),
                value,
                unit: row.units.clone().unwrap_or_default(),
                reference_range: row.reference_range.clone().unwrap_or_default(),
                abnormal_flag: row.abnormal_flag.clone().unwrap_or_default(),
                observation_status: row.observation_status.clone().unwrap_or_default(),
                order_status: row.order_status.clone().unwrap_or_default(),
                sending_facility: row.sending_facility.clone().unwrap_or_default(),
                collection_date_time: row.collection_date_time.clone(),
                result_date_time: row.result_date_time.clone(),
                notes: result.notes.clone(),
            });
        }
    }
    out
}

pub fn report_id(order_key: &str, unix_millis: i64) -> String {
    format!("LAB_{order_key}_{unix_millis}")
}

pub fn build_report(
    order_key: &str,
    biomarkers: &[ParsedBiomarker],
    units: &UnitTable,
    unix_millis: i64,
) -> BiomarkerReport {
    BiomarkerReport {
        lab_test_report_id: report_id(order_key, unix_millis),
        biomarkers: biomarkers.iter().map(|b| b.to_input(units)).collect(),
    }
}

/// Name of the custom attribute holding an order's extended metadata.
pub fn metadata_attribute(order_key: &str) -> String {
    format!("lab_results_{order_key}")
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDates<'a> {
    pub collection: Option<&'a str>,
    pub result: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct OrderNotes<'a> {
    pub order: &'a [Value],
    pub patient: &'a [Value],
    pub results: Vec<&'a Value>,
}

/// Everything about an order that the biomarker record cannot hold.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderMetadata<'a> {
    pub order_key: &'a str,
    pub synced_at: String,
    pub dates: OrderDates<'a>,
    pub biomarker_details: &'a [ParsedBiomarker],
    pub notes: OrderNotes<'a>,
    pub pdf_reports: &'a [Value],
}

pub fn order_metadata<'a>(
    order_key: &'a str,
    order: &'a LabOrder,
    patient: &'a LabPatient,
    biomarkers: &'a [ParsedBiomarker],
    synced_at: String,
) -> OrderMetadata<'a> {
    let first = biomarkers.first();
    OrderMetadata {
        order_key,
        synced_at,
        dates: OrderDates {
            collection: first.and_then(|b| b.collection_date_time.as_deref()),
            result: first.and_then(|b| b.result_date_time.as_deref()),
        },
        biomarker_details: biomarkers,
        notes: OrderNotes {
            order: &order.notes,
            patient: &patient.notes,
            results: biomarkers.iter().flat_map(|b| b.notes.iter()).collect(),
        },
        pdf_reports: &order.pdfs,
    }
}
