//! The fixed item catalog.

use std::collections::HashSet;

use crate::error::{CatalogError, Result};
use crate::types::Item;

/// Shortcodes and renderings of the standard catalog, in display order.
const TOP_EMOJI: &[(&str, &str)] = &[
    (":joy:", "😂"),
    (":sunglasses:", "😎"),
    (":doughnut:", "🍩"),
    (":stuck_out_tongue_winking_eye:", "😜"),
    (":money_mouth_face:", "🤑"),
    (":flushed:", "😳"),
    (":mask:", "😷"),
    (":nerd_face:", "🤓"),
    (":ghost:", "👻"),
    (":skull_and_crossbones:", "☠️"),
    (":heart_eyes_cat:", "😻"),
    (":hear_no_evil:", "🙉"),
    (":see_no_evil:", "🙈"),
    (":speak_no_evil:", "🙊"),
    (":boy:", "👦"),
    (":girl:", "👧"),
    (":man:", "👨"),
    (":woman:", "👩"),
    (":older_man:", "👴"),
    (":policeman:", "👮"),
    (":guardsman:", "💂"),
    (":construction_worker_man:", "👷"),
    (":prince:", "🤴"),
    (":princess:", "👸"),
    (":man_in_tuxedo:", "🤵"),
    (":bride_with_veil:", "👰"),
    (":mrs_claus:", "🤶"),
    (":santa:", "🎅"),
    (":turkey:", "🦃"),
    (":rabbit:", "🐰"),
    (":no_good_woman:", "🙅"),
    (":ok_woman:", "🙆"),
    (":raising_hand_woman:", "🙋"),
    (":bowing_man:", "🙇"),
    (":man_facepalming:", "🤦"),
    (":woman_shrugging:", "🤷"),
    (":massage_woman:", "💆"),
    (":walking_man:", "🚶"),
    (":running_man:", "🏃"),
    (":dancer:", "💃"),
    (":man_dancing:", "🕺"),
    (":dancing_women:", "👯"),
    (":rainbow:", "🌈"),
    (":skier:", "⛷"),
    (":golfing_man:", "🏌"),
    (":surfing_man:", "🏄"),
    (":basketball_man:", "⛹"),
    (":biking_man:", "🚴"),
    (":point_up_2:", "👆"),
    (":vulcan_salute:", "🖖"),
    (":metal:", "🤘"),
    (":call_me_hand:", "🤙"),
    (":thumbsup:", "👍"),
    (":wave:", "👋"),
    (":clap:", "👏"),
    (":raised_hands:", "🙌"),
    (":pray:", "🙏"),
    (":dog:", "🐶"),
    (":cat2:", "🐈"),
    (":pig:", "🐷"),
    (":hatching_chick:", "🐣"),
    (":snail:", "🐌"),
    (":bacon:", "🥓"),
    (":pizza:", "🍕"),
    (":taco:", "🌮"),
    (":burrito:", "🌯"),
    (":ramen:", "🍜"),
    (":champagne:", "🍾"),
    (":tropical_drink:", "🍹"),
    (":beer:", "🍺"),
    (":tumbler_glass:", "🥃"),
    (":world_map:", "🗺"),
    (":beach_umbrella:", "🏖"),
    (":mountain_snow:", "🏔"),
    (":camping:", "🏕"),
    (":steam_locomotive:", "🚂"),
    (":flight_departure:", "🛫"),
    (":rocket:", "🚀"),
    (":star2:", "🌟"),
    (":sun_behind_small_cloud:", "🌤"),
    (":cloud_with_rain:", "🌧"),
    (":fire:", "🔥"),
    (":jack_o_lantern:", "🎃"),
    (":balloon:", "🎈"),
    (":tada:", "🎉"),
    (":trophy:", "🏆"),
    (":iphone:", "📱"),
    (":pager:", "📟"),
    (":fax:", "📠"),
    (":bulb:", "💡"),
    (":money_with_wings:", "💸"),
    (":crystal_ball:", "🔮"),
    (":underage:", "🔞"),
    (":interrobang:", "⁉️"),
    (":100:", "💯"),
    (":checkered_flag:", "🏁"),
    (":crossed_swords:", "⚔️"),
    (":floppy_disk:", "💾"),
    (":poop:", "💩"),
];

/// Immutable, ordered list of votable items.
///
/// Built once at startup and shared read-only (typically behind an `Arc`).
/// Codes are guaranteed unique and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCatalog {
    items: Vec<Item>,
}

impl ItemCatalog {
    /// Builds a catalog from an arbitrary item list, preserving order.
    pub fn new(items: Vec<Item>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());

        for (position, item) in items.iter().enumerate() {
            if item.code().trim().is_empty() {
                return Err(CatalogError::EmptyCode { position });
            }
            if !seen.insert(item.code()) {
                return Err(CatalogError::duplicate_code(item.code()));
            }
        }

        Ok(Self { items })
    }

    /// Returns the standard emoji catalog.
    pub fn standard() -> Self {
        let items = TOP_EMOJI
            .iter()
            .map(|(code, display)| Item::new(*code, *display))
            .collect();

        Self { items }
    }

    /// Finds an item by code with a linear scan.
    pub fn find(&self, code: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.code() == code)
    }

    /// Returns true if an item with `code` exists.
    pub fn contains(&self, code: &str) -> bool {
        self.find(code).is_some()
    }

    /// Returns all items in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for ItemCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
