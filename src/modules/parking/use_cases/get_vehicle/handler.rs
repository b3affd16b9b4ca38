// Read side for a single vehicle: its record, where it is parked, and its event history.
//
// Both queries return None when the license plate was never checked in.

use crate::modules::parking::adapters::outbound::parking_event_store::ParkingEventStore;
use crate::modules::parking::adapters::outbound::parking_spot_store::ParkingSpotStore;
use crate::modules::parking::adapters::outbound::vehicle_store::VehicleStore;
use crate::modules::parking::use_cases::get_vehicle::projection::{ParkingEventView, VehicleView};
use crate::modules::parking::use_cases::list_free_spots::projection::SpotView;

pub async fn find_vehicle(
    vehicles: &dyn VehicleStore,
    spots: &dyn ParkingSpotStore,
    license_plate: &str,
) -> anyhow::Result<Option<VehicleView>> {
    let Some(vehicle) = vehicles.find_by_license_plate(license_plate).await? else {
        return Ok(None);
    };
    let parked_at = spots.find_by_occupant(vehicle.id()).await?.map(SpotView::from);
    Ok(Some(VehicleView::new(vehicle, parked_at)))
}

pub async fn vehicle_events(
    vehicles: &dyn VehicleStore,
    events: &dyn ParkingEventStore,
    license_plate: &str,
) -> anyhow::Result<Option<Vec<ParkingEventView>>> {
    if vehicles.find_by_license_plate(license_plate).await?.is_none() {
        return Ok(None);
    }
    let history = events.list_by_vehicle(license_plate).await?;
    Ok(Some(history.into_iter().map(ParkingEventView::from).collect()))
}
