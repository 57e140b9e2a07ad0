//! Pipeline orchestration: raw elements in, assembled report out.

use log::{debug, info};

use crate::extract::{
    count_traffic_controls, count_transit_stops, extract_buildings, extract_green_and_water,
    extract_roads, survey_parking,
};
use crate::geometry::{bounding_box_area_km2, round1};
use crate::model::{
    AnalysisReport, BoundingBox, CongestionDetails, GeoElement, LongestRoad, Road, node_index,
};
use crate::score;
use crate::topology::classify_intersections;

/// Run the full analysis for one bounding box over an already-fetched
/// element collection.
///
/// Pure and synchronous: no state survives the call, identical input
/// yields an identical report. An empty element collection produces a
/// complete "no data" report rather than an error.
pub fn analyze_area(bounds: BoundingBox, elements: &[GeoElement]) -> AnalysisReport {
    info!(
        "Analyzing box [{:.4}, {:.4}] x [{:.4}, {:.4}] over {} elements",
        bounds.south,
        bounds.north,
        bounds.west,
        bounds.east,
        elements.len()
    );

    let coords = node_index(elements);
    let area = bounding_box_area_km2(&bounds);

    let inventory = extract_roads(elements, &coords);
    let intersections = classify_intersections(&inventory.roads, &coords);
    let controls = count_traffic_controls(elements);
    let parking = survey_parking(elements);
    let buildings = extract_buildings(elements, &coords);
    let (green_spaces, water_features) = extract_green_and_water(elements, &coords);
    let transit = count_transit_stops(elements);
    debug!(
        "Extracted {} roads ({} categorized), {} buildings, {} green, {} water, {} stops",
        inventory.count,
        inventory.categorized_total(),
        buildings.len(),
        green_spaces.len(),
        water_features.len(),
        transit.total_stops
    );

    let area_type = score::determine_area_type(&buildings);

    let base_congestion = score::base_road_congestion(&inventory, &intersections, &controls);
    let building_impact = score::building_impact(&buildings, &inventory.roads, &coords);
    let parking_impact = score::parking_impact(&parking, &inventory.roads);
    let transport_relief = score::transit_relief(&transit);
    let congestion = score::final_congestion(
        base_congestion,
        building_impact,
        parking_impact,
        transport_relief,
    );

    let hourly_congestion =
        score::hourly_congestion(area_type, base_congestion, building_impact, &buildings);
    let ecology = score::ecology_score(
        &green_spaces,
        &water_features,
        area,
        &inventory,
        &controls,
        &parking,
        &hourly_congestion,
    );

    info!("Analysis complete: congestion {congestion}, ecology {ecology}");

    AnalysisReport {
        bounds: [[bounds.north, bounds.west], [bounds.south, bounds.east]],
        area,
        area_type,
        road_count: inventory.count,
        longest_road: find_longest_road(&inventory.roads),
        intersections,
        traffic_controls: controls,
        parking_spots: parking.total_spots,
        congestion,
        congestion_details: CongestionDetails {
            base_road_congestion: round1(base_congestion),
            building_impact: round1(building_impact),
            parking_impact: round1(parking_impact),
            transport_relief: if transport_relief > 0.0 {
                -round1(transport_relief)
            } else {
                0.0
            },
        },
        ecology,
        pedestrian_friendly: score::pedestrian_score(&inventory),
        public_transport: score::transit_score(&transit),
        hourly_congestion,
        road_types: inventory.by_category,
        roads_data: inventory.roads,
        green_spaces_data: green_spaces,
        water_features_data: water_features,
        buildings_data: buildings,
        parking_data: parking,
    }
}

/// Pick the report's highlight road: the longest named road, or the
/// longest overall when nothing in the box carries a name.
fn find_longest_road(roads: &[Road]) -> LongestRoad {
    let named_longest = longest_of(roads.iter().filter(|road| road.is_named()));
    let longest = named_longest.or_else(|| longest_of(roads.iter()));

    match longest {
        Some(road) => LongestRoad {
            name: road.name.clone(),
            length: road.length_km,
            highway: road.highway.clone(),
            lanes: road.lanes,
        },
        None => LongestRoad::no_data(),
    }
}

fn longest_of<'a>(roads: impl Iterator<Item = &'a Road>) -> Option<&'a Road> {
    // first of equals wins, keeping selection order-stable
    roads.fold(None, |best: Option<&Road>, road| match best {
        Some(current) if current.length_km >= road.length_km => Some(current),
        _ => Some(road),
    })
}
