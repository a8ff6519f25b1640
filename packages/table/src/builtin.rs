//! The ESF save-file split layout.
//!
//! Keys are ESF record names (plus a few lowercase block names). Fragments
//! are relative to the split output directory.

use crate::error::Result;
use crate::table::PathTable;

/// Built-in `(key, fragment)` pairs in declaration order.
///
/// `CAI_WORLD_REOURCE_MOBILES` and `CAI_WORLD_RESOURCE_MOBILES` are distinct
/// record names and map to different directories.
pub const ENTRIES: &[(&str, &str)] = &[
    ("CAI_INTERFACE", "cai_interface/cai"),
    ("CAI_HISTORY", "cai_interface/cai_history"),
    ("CAI_WORLD", "cai_interface/cai_world"),
    ("CAI_WORLD_FACTIONS", "cai_factions/faction"),
    ("CAI_WORLD_REGIONS", "cai_regions/region"),
    ("CAI_WORLD_REGION_BOUNDARIES", "cai_boundaries/boundary"),
    ("CAI_WORLD_SETTLEMENTS", "cai_settlements/settlement"),
    ("CAI_WORLD_BUILDING_SLOTS", "cai_building_slots/building_slot"),
    ("CAI_WORLD_REGION_SLOTS", "cai_region_slots/region_slot"),
    ("CAI_WORLD_CHARACTERS", "cai_characters/character"),
    ("CAI_WORLD_REOURCE_MOBILES", "cai_armies/army"),
    ("CAI_WORLD_UNITS", "cai_units/unit"),
    ("CAI_WORLD_REGION_HLICS", "cai_region_hlics/hlics"),
    ("CAI_WORLD_TRADING_POSTS", "cai_trading_posts/trading_post"),
    ("CAI_WORLD_RESOURCE_MOBILES", "cai_mobiles/mobile"),
    ("CAI_INTERFACE_MANAGERS", "cai_interface_managers/manager"),
    ("CAI_BDI_POOL", "bdi_pool/"),
    ("CAI_WORLD_TRADE_ROUTES", "cai_trade_routes/"),
    ("CAI_WORLD_TECHNOLOGY_TREES", "cai_tech_trees/"),
    ("CAI_WORLD_GOVERNORSHIPS", "cai_governorships/"),
    ("FACTION", "factions/"),
    ("QUAD_TREE_BIT_ARRAY", "quadtree/"),
    ("grid_data", "grid_data"),
    ("pathfinding_areas", "pathfinding_areas"),
    ("query_info", "query_info"),
    ("region_data", "region_data"),
    ("regions", "regions/"),
    ("NAVAL_UNIT_NAME_ALLOCATOR", "unit_name_alloc/naval"),
    ("LAND_UNIT_NAMES_MAP", "unit_name_alloc/land"),
    ("REGION", "region/"),
    ("SAVE_GAME_HEADER", "save_game_header/"),
    ("CAMPAIGN_PREOPEN_MAP_INFO", "preopen_map_info/info"),
    ("VICTORY_CONDITION_OPTIONS", "victory_conditions/"),
    ("CAMPAIGN_ENV", "campaign_env/env"),
    ("CAMPAIGN_SETUP", "campaign_env/campaign_setup"),
    ("CAMPAIGN_MODEL", "campaign_env/campaign_model"),
    ("WORLD", "campaign_env/world"),
    ("CAMPAIGN_TRADE_MANAGER", "campaign_env/trade_manager"),
    ("PORTRAIT_ALLOCATOR", "campaign_env/portrait_alloc"),
    ("MARKER_MANAGER", "campaign_env/marker_manager"),
    ("CAMPAIGN_PATHFINDER", "campaign-pathfinder/"),
    ("PATHFINDING_GRID", "campaign-pathfinder/grid"),
    ("DIPLOMACY_MANAGER", "diplomacy/"),
    ("FACTION_TECHNOLOGY_MANAGER", "technology/"),
    ("ARMY_ARRAY", "army/"),
    ("DOMESTIC_TRADE_ROUTES", "domestic_trade_routes/"),
    ("INTERNATIONAL_TRADE_ROUTES", "international_trade_routes/"),
    ("GOVERNMENT", "government/"),
    ("FAMILY", "family/"),
    ("CHARACTER_ARRAY", "character/"),
    ("POPULATION", "population/"),
    ("FARM_MANAGER", "farm_manager"),
    ("TREE_LOD_LIST", "tree_lod_list"),
    ("BATTLE_MAP_DEFINITION", "battle_map_definition"),
    ("REGION_SLOT_ARRAY", "region_slot/"),
];

impl PathTable {
    /// The ESF split table built from [`ENTRIES`].
    pub fn builtin() -> Result<Self> {
        PathTable::from_pairs(ENTRIES.iter().copied())
    }
}
