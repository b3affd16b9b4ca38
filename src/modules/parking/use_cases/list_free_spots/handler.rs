use crate::modules::parking::adapters::outbound::parking_spot_store::ParkingSpotStore;
use crate::modules::parking::use_cases::list_free_spots::projection::SpotView;

pub async fn list_free_spots(spots: &dyn ParkingSpotStore) -> anyhow::Result<Vec<SpotView>> {
    let free = spots.list_free().await?;
    Ok(free.into_iter().map(SpotView::from).collect())
}
