use rand::Rng;

use crate::core::narrative::pick;

const DEFAULT_BASE: &str = "Un loc fain pentru ieșit cu prietenii.";
const UNKNOWN_ADDRESS: &str = "necunoscută";

static VIBE_REMARKS: &[&str] = &[
    "Atmosfera e relaxată, cu un vibe prietenos, perfect dacă vrei să stai la povești mai mult timp.",
    "E genul de loc unde poți veni după cursuri sau după muncă, când ai nevoie de un reset rapid.",
    "Se potrivește atât pentru o întâlnire lejeră, cât și pentru seri mai gălăgioase cu gașca.",
];

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Short "vibe" blurb for a venue, built locally from templates
///
/// Missing fields fall back to a generic description and an unknown address.
pub fn generate_vibe<R: Rng + ?Sized>(
    name: Option<&str>,
    short_description: Option<&str>,
    address: Option<&str>,
    rng: &mut R,
) -> String {
    let base = non_blank(short_description).unwrap_or(DEFAULT_BASE);
    let remark = pick(VIBE_REMARKS, rng);
    let address = non_blank(address).unwrap_or(UNKNOWN_ADDRESS);

    match non_blank(name) {
        Some(name) => format!("\"{}\" – {} {} Adresa: {}.", name, base, remark, address),
        None => format!("{} {} Adresa: {}.", base, remark, address),
    }
}
