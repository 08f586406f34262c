use itertools::Itertools;

use super::{
    Division, Office, LEVEL_ADMINISTRATIVE_AREA_1, LEVEL_COUNTRY, ROLE_LEGISLATOR_LOWER_BODY,
    ROLE_LEGISLATOR_UPPER_BODY,
};

/// The text is destined for rich-text display, so line breaks are rendered
/// as explicit tags.
const LINE_BREAK: &str = "<br/>";

pub(crate) fn prepare_display_text(divisions: &[Division]) -> String {
    let mut lines: Vec<String> = Vec::new();

    for division in divisions {
        lines.push(division.division_name.clone());
        for office in &division.offices {
            for official in &office.officials {
                lines.push(format!("{}: {}", office.name, official));
            }
        }
        lines.push(String::new());
    }

    // Visual separator between the per-division listing and the summary.
    for _ in 0..4 {
        lines.push(String::new());
    }

    let offices = divisions
        .iter()
        .flat_map(|division| division.offices.iter())
        .collect_vec();

    lines.push(format!(
        "<b>National Senate:</b> {}",
        officials_name(&offices, LEVEL_COUNTRY, ROLE_LEGISLATOR_UPPER_BODY)
    ));

    let number = district_number(&offices, LEVEL_COUNTRY, ROLE_LEGISLATOR_LOWER_BODY);
    if !number.is_empty() {
        lines.push(format!("<b>Congressional District Number:</b> {number}"));
    }
    lines.push(format!(
        "<b>Congressional District:</b> {}",
        district_name(
            divisions,
            &offices,
            LEVEL_COUNTRY,
            ROLE_LEGISLATOR_LOWER_BODY
        )
    ));
    lines.push(format!(
        "<b>Congressional Representative:</b> {}",
        officials_name(&offices, LEVEL_COUNTRY, ROLE_LEGISLATOR_LOWER_BODY)
    ));

    let number = district_number(
        &offices,
        LEVEL_ADMINISTRATIVE_AREA_1,
        ROLE_LEGISLATOR_UPPER_BODY,
    );
    if !number.is_empty() {
        lines.push(format!("<b>State Upper House District Number:</b> {number}"));
    }
    lines.push(format!(
        "<b>State Upper House District:</b> {}",
        district_name(
            divisions,
            &offices,
            LEVEL_ADMINISTRATIVE_AREA_1,
            ROLE_LEGISLATOR_UPPER_BODY
        )
    ));
    lines.push(format!(
        "<b>State Upper House Representative:</b> {}",
        officials_name(
            &offices,
            LEVEL_ADMINISTRATIVE_AREA_1,
            ROLE_LEGISLATOR_UPPER_BODY
        )
    ));

    let number = district_number(
        &offices,
        LEVEL_ADMINISTRATIVE_AREA_1,
        ROLE_LEGISLATOR_LOWER_BODY,
    );
    if !number.is_empty() {
        lines.push(format!("<b>State Lower House District Number:</b> {number}"));
    }
    lines.push(format!(
        "<b>State Lower House District:</b> {}",
        district_name(
            divisions,
            &offices,
            LEVEL_ADMINISTRATIVE_AREA_1,
            ROLE_LEGISLATOR_LOWER_BODY
        )
    ));
    lines.push(format!(
        "<b>State Lower House Representative:</b> {}",
        officials_name(
            &offices,
            LEVEL_ADMINISTRATIVE_AREA_1,
            ROLE_LEGISLATOR_LOWER_BODY
        )
    ));

    let mut text = lines.join("\n");
    text.push('\n');
    text.replace('\n', LINE_BREAK)
}

/// First office carrying both the level and the role wins; any further
/// matches are ignored.
fn find_office<'a>(offices: &[&'a Office], level: &str, role: &str) -> Option<&'a Office> {
    offices
        .iter()
        .find(|office| {
            office.roles.iter().any(|r| r == role) && office.levels.iter().any(|l| l == level)
        })
        .copied()
}

fn officials_name(offices: &[&Office], level: &str, role: &str) -> String {
    find_office(offices, level, role)
        .map(|office| office.officials.iter().join(", "))
        .unwrap_or_default()
}

/// The district number is whatever follows the last `:` of the division id,
/// e.g. `ocd-division/country:us/state:ny/cd:12` -> `12`.
fn district_number(offices: &[&Office], level: &str, role: &str) -> String {
    find_office(offices, level, role)
        .and_then(|office| office.division_id.as_ref().rsplit_once(':'))
        .map(|(_, number)| number.to_string())
        .unwrap_or_default()
}

fn district_name(divisions: &[Division], offices: &[&Office], level: &str, role: &str) -> String {
    find_office(offices, level, role)
        .and_then(|office| {
            divisions
                .iter()
                .find(|division| division.division_id == office.division_id)
        })
        .map(|division| division.division_name.clone())
        .unwrap_or_default()
}
