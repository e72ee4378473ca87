// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{
    borrow::Cow,
    collections::{HashMap, VecDeque},
    sync::Arc,
};

use log::{trace, warn};
use regex::Regex;

use crate::{
    i18n,
    interfaces::NumberingPlanLookup,
    proto_gen::numbering_plan::{NumberFormat, NumberingPlan, NumberingPlanCollection},
    regexp_cache::{InvalidRegexError, RegexCache},
};

use super::{
    errors::PlanLoadError,
    helper_constants::{
        MAX_LENGTH_COUNTRY_CODE, MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_NSN,
        REGION_CODE_FOR_NON_GEO_ENTITY,
    },
    helper_functions::is_possible_length,
    phone_number_regexps_and_mappings::PhoneNumberRegExpsAndMappings,
};

/// A [`NumberFormat`] with its patterns compiled and its national prefix
/// formatting rule resolved against the plan's national prefix.
pub(crate) struct CompiledNumberFormat {
    /// Matches the whole national significant number.
    pub pattern: Arc<Regex>,
    /// Matches the start of the national significant number.
    pub leading_digits: Option<Arc<Regex>>,
    pub format: String,
    /// "$NP" and "$FG" already replaced by the national prefix and "$1".
    pub national_prefix_formatting_rule: Option<String>,
}

impl CompiledNumberFormat {
    pub fn applies_to(&self, national_number: &str) -> bool {
        self.leading_digits
            .as_ref()
            .map_or(true, |leading| leading.is_match(national_number))
            && self.pattern.is_match(national_number)
    }
}

/// One region's numbering plan, checked and compiled.
pub struct PlanEntry {
    plan: NumberingPlan,
    number_formats: Vec<CompiledNumberFormat>,
    intl_number_formats: Vec<CompiledNumberFormat>,
    international_prefix: Option<Arc<Regex>>,
}

impl PlanEntry {
    /// The raw plan message this entry was built from.
    pub fn plan(&self) -> &NumberingPlan {
        &self.plan
    }

    pub fn region_code(&self) -> &str {
        self.plan.id()
    }

    pub fn country_code(&self) -> i32 {
        self.plan.country_code()
    }

    pub fn min_length(&self) -> usize {
        self.plan.min_length() as usize
    }

    pub fn max_length(&self) -> usize {
        self.plan.max_length() as usize
    }

    pub fn is_possible_length(&self, national_number_length: usize) -> bool {
        is_possible_length(national_number_length, &self.plan)
    }

    pub fn national_prefix(&self) -> Option<&str> {
        Some(self.plan.national_prefix()).filter(|prefix| !prefix.is_empty())
    }

    /// Returns the length of the international dialing prefix `number`
    /// starts with, if any.
    pub(crate) fn match_international_prefix(&self, number: &str) -> Option<usize> {
        self.international_prefix
            .as_ref()
            .and_then(|prefix| prefix.find(number))
            .map(|found| found.end())
    }

    pub(crate) fn number_formats(&self) -> &[CompiledNumberFormat] {
        &self.number_formats
    }

    /// Formats used for INTERNATIONAL output. Falls back to the national
    /// formats when the plan has no dedicated ones.
    pub(crate) fn intl_number_formats(&self) -> &[CompiledNumberFormat] {
        if self.intl_number_formats.is_empty() {
            &self.number_formats
        } else {
            &self.intl_number_formats
        }
    }
}

/// Immutable table of numbering plans, indexed by region code and by
/// country calling code.
pub struct NumberingPlanTable {
    /// A mapping from a region code to the plan for that region.
    region_to_plan_map: HashMap<String, PlanEntry>,

    /// A mapping from a country calling code for a non-geographical entity to
    /// the plan for that country calling code, e.g. 800 (International Toll
    /// Free Service).
    country_code_to_non_geographical_plan_map: HashMap<i32, PlanEntry>,

    /// A mapping from a country calling code to the regions that use it, main
    /// region first. Note regions under NANPA share the country calling code
    /// 1 and Russia and Kazakhstan share the country calling code 7. This is
    /// implemented as a sorted vector to achieve better performance.
    country_calling_code_to_region_code_map: Vec<(i32, Vec<String>)>,
}

impl NumberingPlanTable {
    /// Decodes a plan collection written in protobuf text format.
    pub fn from_text(text: &str) -> Result<Self, PlanLoadError> {
        let collection = protobuf::text_format::parse_from_str::<NumberingPlanCollection>(text)
            .map_err(|err| PlanLoadError::Decode(err.to_string()))?;
        Self::new(collection)
    }

    /// Checks and compiles every plan of the collection. Fails on the first
    /// invalid plan; no partially loaded table is ever returned.
    pub fn new(collection: NumberingPlanCollection) -> Result<Self, PlanLoadError> {
        let reg_exps = PhoneNumberRegExpsAndMappings::new();
        let cache = RegexCache::with_capacity(collection.plan.len() * 4);

        let mut region_to_plan_map = HashMap::with_capacity(collection.plan.len());
        let mut country_code_to_non_geographical_plan_map = HashMap::new();
        // Storing data in a temporary map to make it easier to find other regions
        // that share a country calling code when inserting data.
        let mut country_calling_code_to_region_map = HashMap::<i32, VecDeque<String>>::new();

        for (index, plan) in collection.plan.into_iter().enumerate() {
            let entry = compile_plan(index, plan, &cache, &reg_exps)?;
            let region_code = entry.region_code().to_owned();
            let country_calling_code = entry.country_code();
            let main_country_code = entry.plan.main_country_for_code();

            if REGION_CODE_FOR_NON_GEO_ENTITY == region_code {
                if country_code_to_non_geographical_plan_map
                    .insert(country_calling_code, entry)
                    .is_some()
                {
                    return Err(PlanLoadError::DuplicateNonGeoCode(country_calling_code));
                }
            } else if region_to_plan_map.contains_key(&region_code) {
                return Err(PlanLoadError::DuplicateRegion(region_code));
            } else {
                region_to_plan_map.insert(region_code.clone(), entry);
            }

            let regions = country_calling_code_to_region_map
                .entry(country_calling_code)
                .or_default();
            if main_country_code {
                regions.push_front(region_code);
            } else {
                regions.push_back(region_code);
            }
        }

        let mut country_calling_code_to_region_code_map = country_calling_code_to_region_map
            .into_iter()
            .map(|(code, regions)| (code, Vec::from(regions)))
            .collect::<Vec<_>>();
        // Sort all the pairs in ascending order according to country calling code.
        country_calling_code_to_region_code_map.sort_by_key(|(code, _)| *code);

        trace!(
            "Loaded {} regional and {} non-geographical numbering plans ({} compiled patterns)",
            region_to_plan_map.len(),
            country_code_to_non_geographical_plan_map.len(),
            cache.len()
        );

        Ok(Self {
            region_to_plan_map,
            country_code_to_non_geographical_plan_map,
            country_calling_code_to_region_code_map,
        })
    }

    pub fn plan_for_region(&self, region_code: &str) -> Option<&PlanEntry> {
        self.region_to_plan_map.get(&*normalize_region_code(region_code))
    }

    pub fn plan_for_non_geo_entity(&self, country_calling_code: i32) -> Option<&PlanEntry> {
        self.country_code_to_non_geographical_plan_map
            .get(&country_calling_code)
    }

    /// Returns the region codes using a country calling code, main region
    /// first. Non-geographical entities are reported as "001".
    pub fn regions_for_country_code(&self, country_calling_code: i32) -> &[String] {
        self.country_calling_code_to_region_code_map
            .binary_search_by_key(&country_calling_code, |(code, _)| *code)
            .map(|index| self.country_calling_code_to_region_code_map[index].1.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the region code holding the rules for a country calling code,
    /// or the unknown region "ZZ".
    pub fn region_code_for_country_code(&self, country_calling_code: i32) -> &str {
        self.regions_for_country_code(country_calling_code)
            .first()
            .map(|region| region.as_str())
            .unwrap_or(i18n::RegionCode::get_unknown())
    }

    /// Returns every plan using a country calling code, main plan first.
    pub fn plans_for_country_code(&self, country_calling_code: i32) -> impl Iterator<Item = &PlanEntry> {
        self.regions_for_country_code(country_calling_code)
            .iter()
            .filter_map(move |region| {
                if REGION_CODE_FOR_NON_GEO_ENTITY == region {
                    self.plan_for_non_geo_entity(country_calling_code)
                } else {
                    self.region_to_plan_map.get(region)
                }
            })
    }

    pub fn has_country_code(&self, country_calling_code: i32) -> bool {
        self.country_calling_code_to_region_code_map
            .binary_search_by_key(&country_calling_code, |(code, _)| *code)
            .is_ok()
    }

    pub fn supported_regions(&self) -> impl Iterator<Item = &str> {
        self.region_to_plan_map.keys().map(|region| region.as_str())
    }

    /// Country calling codes in ascending order, non-geographical ones
    /// included.
    pub fn supported_calling_codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.country_calling_code_to_region_code_map
            .iter()
            .map(|(code, _)| *code)
    }

    pub fn supported_global_network_calling_codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.country_code_to_non_geographical_plan_map.keys().copied()
    }
}

impl NumberingPlanLookup for NumberingPlanTable {
    fn lookup(&self, country_code: i32) -> Option<&PlanEntry> {
        self.plans_for_country_code(country_code).next()
    }

    fn lookup_by_region(&self, region_code: &str) -> Option<i32> {
        let plan = self.plan_for_region(region_code);
        if plan.is_none() {
            warn!("Invalid or unknown region code provided: {}", region_code);
        }
        plan.map(|plan| plan.country_code())
    }
}

fn normalize_region_code(region_code: &str) -> Cow<'_, str> {
    if region_code.bytes().any(|b| b.is_ascii_lowercase()) {
        Cow::Owned(region_code.to_ascii_uppercase())
    } else {
        Cow::Borrowed(region_code)
    }
}

fn compile_plan(
    index: usize,
    plan: NumberingPlan,
    cache: &RegexCache,
    reg_exps: &PhoneNumberRegExpsAndMappings,
) -> Result<PlanEntry, PlanLoadError> {
    if !plan.has_id() || plan.id().is_empty() {
        return Err(PlanLoadError::MissingField { index, field: "id" });
    }
    let region = plan.id();
    if !plan.has_country_code() {
        return Err(PlanLoadError::MissingField { index, field: "country_code" });
    }
    let country_code = plan.country_code();
    let mut buf = itoa::Buffer::new();
    if country_code <= 0 || buf.format(country_code).len() > MAX_LENGTH_COUNTRY_CODE {
        return Err(PlanLoadError::InvalidCountryCode {
            region: region.to_owned(),
            country_code,
        });
    }
    if !plan.has_min_length() {
        return Err(PlanLoadError::MissingField { index, field: "min_length" });
    }
    if !plan.has_max_length() {
        return Err(PlanLoadError::MissingField { index, field: "max_length" });
    }
    let (min, max) = (plan.min_length(), plan.max_length());
    if min < MIN_LENGTH_FOR_NSN || max > MAX_LENGTH_FOR_NSN || min > max {
        return Err(PlanLoadError::InvalidLengthRange {
            region: region.to_owned(),
            min,
            max,
        });
    }

    let invalid_regex = |source: InvalidRegexError| PlanLoadError::InvalidRegex {
        region: region.to_owned(),
        source,
    };
    let international_prefix = if plan.international_prefix().is_empty() {
        None
    } else {
        Some(cache.get_prefix_regex(plan.international_prefix()).map_err(invalid_regex)?)
    };
    let number_formats = compile_formats(&plan, &plan.number_format, cache, reg_exps)?;
    let intl_number_formats = compile_formats(&plan, &plan.intl_number_format, cache, reg_exps)?;

    Ok(PlanEntry {
        plan,
        number_formats,
        intl_number_formats,
        international_prefix,
    })
}

fn compile_formats(
    plan: &NumberingPlan,
    formats: &[NumberFormat],
    cache: &RegexCache,
    reg_exps: &PhoneNumberRegExpsAndMappings,
) -> Result<Vec<CompiledNumberFormat>, PlanLoadError> {
    let invalid_regex = |source: InvalidRegexError| PlanLoadError::InvalidRegex {
        region: plan.id().to_owned(),
        source,
    };
    let mut compiled = Vec::with_capacity(formats.len());
    for format in formats {
        let pattern = cache.get_full_match_regex(format.pattern()).map_err(&invalid_regex)?;
        // We always use the last leading_digits_pattern, as it is the most
        // detailed.
        let leading_digits = format
            .leading_digits_pattern
            .last()
            .map(|leading| cache.get_prefix_regex(leading))
            .transpose()
            .map_err(&invalid_regex)?;

        compiled.push(CompiledNumberFormat {
            pattern,
            leading_digits,
            format: format.format().to_owned(),
            national_prefix_formatting_rule: resolve_national_prefix_formatting_rule(
                plan, format, reg_exps,
            )?,
        });
    }
    Ok(compiled)
}

/// Replaces $NP with the national prefix and $FG with the first group ($1).
/// Rules referring to a national prefix the plan does not have are dropped,
/// we don't want to have a rule for how to format the national prefix if
/// there isn't one.
fn resolve_national_prefix_formatting_rule(
    plan: &NumberingPlan,
    format: &NumberFormat,
    reg_exps: &PhoneNumberRegExpsAndMappings,
) -> Result<Option<String>, PlanLoadError> {
    let rule = format.national_prefix_formatting_rule();
    if rule.is_empty() {
        return Ok(None);
    }
    let without_tokens = reg_exps.national_prefix_formatting_tokens.replace_all(rule, "");
    if without_tokens.contains('$') || !rule.contains("$FG") {
        return Err(PlanLoadError::InvalidFormattingRule {
            region: plan.id().to_owned(),
            rule: rule.to_owned(),
        });
    }
    let national_prefix = plan.national_prefix();
    if rule.contains("$NP") && national_prefix.is_empty() {
        return Ok(None);
    }
    Ok(Some(
        rule.replace("$NP", national_prefix).replace("$FG", "$1"),
    ))
}

#[cfg(test)]
mod tests {
    use crate::{
        errors::PlanLoadError,
        interfaces::NumberingPlanLookup,
        proto_gen::numbering_plan::{NumberFormat, NumberingPlan, NumberingPlanCollection},
    };

    use super::NumberingPlanTable;

    fn plan(id: &str, country_code: i32, min: i32, max: i32) -> NumberingPlan {
        let mut plan = NumberingPlan::new();
        plan.set_id(id.to_owned());
        plan.set_country_code(country_code);
        plan.set_min_length(min);
        plan.set_max_length(max);
        plan
    }

    fn collection(plans: Vec<NumberingPlan>) -> NumberingPlanCollection {
        let mut collection = NumberingPlanCollection::new();
        collection.plan = plans;
        collection
    }

    #[test]
    fn shared_country_code_lists_main_region_first() {
        let mut us = plan("US", 1, 10, 10);
        us.set_main_country_for_code(true);
        let table = NumberingPlanTable::new(collection(vec![
            plan("BS", 1, 10, 10),
            us,
            plan("CA", 1, 10, 10),
        ]))
        .unwrap();

        assert_eq!(["US", "BS", "CA"], table.regions_for_country_code(1));
        assert_eq!("US", table.lookup(1).unwrap().region_code());
        assert_eq!(Some(1), table.lookup_by_region("ca"));
        assert_eq!("ZZ", table.region_code_for_country_code(44));
        assert!(table.lookup(44).is_none());
        assert!(table.lookup_by_region("GB").is_none());
    }

    #[test]
    fn non_geographical_entities() {
        let table = NumberingPlanTable::new(collection(vec![
            plan("001", 800, 8, 8),
            plan("GB", 44, 7, 10),
        ]))
        .unwrap();

        assert_eq!(800, table.lookup(800).unwrap().country_code());
        assert!(table.lookup_by_region("001").is_none());
        assert_eq!(vec![800], table.supported_global_network_calling_codes().collect::<Vec<_>>());
        assert_eq!(vec![44, 800], table.supported_calling_codes().collect::<Vec<_>>());
        assert_eq!(vec!["GB"], table.supported_regions().collect::<Vec<_>>());
    }

    #[test]
    fn rejects_invalid_plans() {
        let missing_min = {
            let mut p = NumberingPlan::new();
            p.set_id("GB".to_owned());
            p.set_country_code(44);
            p.set_max_length(10);
            p
        };
        assert_eq!(
            Err(PlanLoadError::MissingField { index: 0, field: "min_length" }),
            NumberingPlanTable::new(collection(vec![missing_min])).map(|_| ())
        );

        assert!(matches!(
            NumberingPlanTable::new(collection(vec![plan("XX", 1234, 5, 6)])),
            Err(PlanLoadError::InvalidCountryCode { country_code: 1234, .. })
        ));
        assert!(matches!(
            NumberingPlanTable::new(collection(vec![plan("XX", 12, 9, 5)])),
            Err(PlanLoadError::InvalidLengthRange { min: 9, max: 5, .. })
        ));
        assert!(matches!(
            NumberingPlanTable::new(collection(vec![plan("XX", 12, 0, 5)])),
            Err(PlanLoadError::InvalidLengthRange { .. })
        ));
        assert_eq!(
            Err(PlanLoadError::DuplicateRegion("GB".to_owned())),
            NumberingPlanTable::new(collection(vec![
                plan("GB", 44, 7, 10),
                plan("GB", 44, 9, 10)
            ]))
            .map(|_| ())
        );
    }

    #[test]
    fn rejects_invalid_patterns() {
        let mut bad_format = plan("GB", 44, 7, 10);
        let mut format = NumberFormat::new();
        format.set_pattern("(\\d{2}(\\d{4})".to_owned());
        format.set_format("$1 $2".to_owned());
        bad_format.number_format.push(format);
        assert!(matches!(
            NumberingPlanTable::new(collection(vec![bad_format])),
            Err(PlanLoadError::InvalidRegex { .. })
        ));

        let mut bad_prefix = plan("GB", 44, 7, 10);
        bad_prefix.set_international_prefix("00[".to_owned());
        assert!(matches!(
            NumberingPlanTable::new(collection(vec![bad_prefix])),
            Err(PlanLoadError::InvalidRegex { .. })
        ));

        let mut bad_rule = plan("GB", 44, 7, 10);
        let mut format = NumberFormat::new();
        format.set_pattern("(\\d{2})(\\d{4})".to_owned());
        format.set_format("$1 $2".to_owned());
        format.set_national_prefix_formatting_rule("$NP$CC".to_owned());
        bad_rule.number_format.push(format);
        assert!(matches!(
            NumberingPlanTable::new(collection(vec![bad_rule])),
            Err(PlanLoadError::InvalidFormattingRule { .. })
        ));
    }

    #[test]
    fn resolves_national_prefix_formatting_rule() {
        let mut gb = plan("GB", 44, 7, 10);
        gb.set_national_prefix("0".to_owned());
        let mut format = NumberFormat::new();
        format.set_pattern("(\\d{2})(\\d{4})(\\d{4})".to_owned());
        format.set_format("$1 $2 $3".to_owned());
        format.set_national_prefix_formatting_rule("($NP$FG)".to_owned());
        gb.number_format.push(format.clone());

        // no national prefix, so the rule is dropped
        let mut it = plan("IT", 39, 6, 11);
        it.number_format.push(format);

        let table = NumberingPlanTable::new(collection(vec![gb, it])).unwrap();
        let gb_format = &table.plan_for_region("GB").unwrap().number_formats()[0];
        assert_eq!(Some("(0$1)"), gb_format.national_prefix_formatting_rule.as_deref());
        assert!(gb_format.applies_to("2070313000"));
        assert!(!gb_format.applies_to("207031300"));

        let it_format = &table.plan_for_region("IT").unwrap().number_formats()[0];
        assert_eq!(None, it_format.national_prefix_formatting_rule.as_deref());
    }

    #[test]
    fn decodes_text_format() {
        let table = NumberingPlanTable::from_text(
            r#"
            plan {
              id: "GB"
              country_code: 44
              min_length: 7
              max_length: 10
              national_prefix: "0"
              international_prefix: "00"
            }
            "#,
        )
        .unwrap();
        let gb = table.plan_for_region("GB").unwrap();
        assert_eq!(Some("0"), gb.national_prefix());
        assert_eq!(Some(2), gb.match_international_prefix("0012"));
        assert_eq!(None, gb.match_international_prefix("0201"));

        assert!(matches!(
            NumberingPlanTable::from_text("plan { id: "),
            Err(PlanLoadError::Decode(_))
        ));
    }
}
