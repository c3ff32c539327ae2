/* src/server/core/rust/src/page/faq.rs */

use crate::record::{EntityRecord, RecordKind, format_km};
use crate::schema::Faq;
use crate::site::SiteDefaults;

/// FAQ entries for a record page, shared by the FAQ section and the FAQPage
/// document so both list the same questions in the same order.
pub fn faqs_for(record: &EntityRecord, site: &SiteDefaults) -> Vec<Faq> {
  let name = &record.display_name;
  let brand = &site.name;
  let airport = &site.airport;
  let price = record
    .price_hint
    .as_ref()
    .map(|p| format!("Transfers from {name} are typically {p} ({}), fixed when you book.", site.currency))
    .unwrap_or_else(|| "You get a fixed price when you book online, with no surcharges on the day.".to_string());

  let mut faqs = Vec::new();
  match &record.kind {
    RecordKind::Suburb { .. } | RecordKind::Hotel { .. } | RecordKind::Venue { .. } => {
      let how_long = match (record.distance_km(), record.travel_time()) {
        (Some(km), Some(t)) => format!("About {t} for the {} km trip, depending on traffic.", format_km(km)),
        (_, Some(t)) => format!("About {t}, depending on traffic."),
        _ => "Most trips take under an hour, depending on traffic.".to_string(),
      };
      faqs.push(Faq::new(format!("How long does it take from {name} to {airport}?"), how_long));
      faqs.push(Faq::new(format!("How much is a shuttle from {name}?"), price));
      if let RecordKind::Venue { .. } = record.kind {
        faqs.push(Faq::new(
          format!("Can you pick up a group after an event at {name}?"),
          "Yes. Book a group van and tell us the finish time; the driver waits at the nominated pickup point.",
        ));
      }
    }
    RecordKind::Competitor { .. } => {
      faqs.push(Faq::new(
        format!("How is {brand} different from {name}?"),
        format!("{brand} is a private door-to-door transfer with a fixed price. You do not share the ride or wait at stops."),
      ));
      faqs.push(Faq::new(
        format!("Is {brand} cheaper than {name}?"),
        "For two or more passengers a private transfer often costs less per person. Get an instant quote to compare.",
      ));
    }
    RecordKind::Market { currency, .. } => {
      faqs.push(Faq::new(
        format!("Can visitors from {name} book before arriving in New Zealand?"),
        "Yes. Book online before you fly; your driver tracks your flight and meets you in the arrivals hall.",
      ));
      let pay = match currency {
        Some(c) => format!("Prices are charged in {}. Your card provider converts from {c}.", site.currency),
        None => format!("Prices are charged in {}.", site.currency),
      };
      faqs.push(Faq::new("Which currency will I pay in?", pay));
    }
  }
  faqs.push(Faq::new(
    "Do you track my flight?",
    "Yes. Every booking includes flight tracking, so pickups move with early or delayed arrivals.",
  ));
  faqs
}
