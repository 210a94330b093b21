//! Static pricing plan catalogs.
//!
//! No upstream publishes pricing, so each adapter family ships a fixed
//! catalog valid from 2020-06-05 until 2020-12-31.

use crate::gbfs::{FeedResponse, PricePlan, Stamp, SystemPricingPlans};
use crate::operators::{AdapterKind, Operator};

/// 2020-06-05T00:00:00Z.
pub const PUBLISHED_AT: i64 = 1_591_315_200;
/// 2020-12-31T00:00:00Z.
pub const VALID_UNTIL: i64 = 1_609_372_800;

const SEASON_PASS: &str = "sesongkort";
const DAY_PASS: &str = "dagskort";
const THREE_DAY_PASS: &str = "3-dagerskort";
const THIRTY_DAY_PASS: &str = "30-dagerskort";
const ADD_ON_PASS: &str = "tilleggskort";

/// Pricing catalog for an operator.
pub fn pricing_plans(operator: Operator) -> FeedResponse<SystemPricingPlans> {
    let stamp = Stamp::at(PUBLISHED_AT, (VALID_UNTIL - PUBLISHED_AT) as u64);
    let plans = match operator.adapter_kind() {
        AdapterKind::UrbanSharing => urban_sharing(operator),
        AdapterKind::Kolumbus => kolumbus(),
        AdapterKind::JcDecaux => jcdecaux(),
        AdapterKind::SmartBike => smartbike(),
    };
    stamp.wrap(SystemPricingPlans { plans })
}

fn plan(id: &str, url: &str, name: &str, price: f64, description: &str) -> PricePlan {
    PricePlan {
        plan_id: id.to_string(),
        url: Some(url.to_string()),
        name: name.to_string(),
        currency: "NOK".to_string(),
        price,
        is_taxable: false,
        description: description.to_string(),
    }
}

fn urban_sharing(operator: Operator) -> Vec<PricePlan> {
    let url = format!("https://{}.no/", operator.name());
    let description = "For usage above an hour, it will follow a running cost of 15.0 NOK per quarter.";
    vec![
        plan("CD863B56-B502-4FDE-B872-C21CD1F8F15C", &url, SEASON_PASS, 399.0, description),
        plan("3F6450C4-05F7-4E4E-8E71-2E641E011FEE", &url, DAY_PASS, 49.0, description),
    ]
}

fn kolumbus() -> Vec<PricePlan> {
    vec![
        plan(
            "636B0671-ED87-42FB-8FAC-6AE8F3A25826",
            "https://www.kolumbus.no/Billetter/-priser-og-produkter/bysykkelbillett/",
            THIRTY_DAY_PASS,
            125.0,
            "Ved sammenhengende bruk i over en time, vil det forekomme et ekstra gebyr på 1.0 NOK per minutt.",
        ),
        plan(
            "2AFBF7AD-4EE6-483F-A32A-3A8C94840996",
            "https://www.kolumbus.no/verdt-a-vite/sykkel-oversikt/bysykkelen/",
            ADD_ON_PASS,
            0.0,
            "Har du en hvilken som helst gyldig billett i appen Kolumbus Billett, eller du jobber i en HjemJobbHjem-bedrift, kan du bruke sykkelen i en time uten å betale noe ekstra.",
        ),
    ]
}

fn jcdecaux() -> Vec<PricePlan> {
    let url = "http://www.bysykkel.org/Abonnement/Satser";
    let description = "Additional charges will run if the bike is unlocked continuously for more than 1 hour. \
                       The next half-hour will then cost 20.0 NOK, while every commenced half-hour after that costs 40.0 NOK";
    vec![
        plan("D16E7EC0-47F5-427D-9B71-CD079F989CC6", url, SEASON_PASS, 50.0, description),
        plan("867E4558-77E3-4608-8941-0C667E924280", url, THREE_DAY_PASS, 10.0, description),
    ]
}

fn smartbike() -> Vec<PricePlan> {
    vec![plan(
        "8B00A621-82E8-4AC0-9B89-ABEAF99BD238",
        "https://www.drammenbysykler.no/nb/info/abonnementer-og-priser",
        SEASON_PASS,
        130.0,
        "",
    )]
}
