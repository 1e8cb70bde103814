use actor_core::tracing::setup_tracing;
use restaurant::config::KitchenConfig;
use restaurant::lifecycle::RestaurantSystem;
use restaurant::model::{Dish, Role};
use restaurant::session::Session;
use tracing::{info, info_span, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let system = RestaurantSystem::new(KitchenConfig::from_env());

    for dish in [
        Dish::new("Carbonara", 499.0, 60, 3),
        Dish::new("Cutlet with mashed potatoes", 299.0, 50, 3),
        Dish::new("Chicken Caesar", 399.0, 40, 3),
        Dish::new("Cheeseburger", 199.0, 20, 3),
        Dish::new("Borscht", 200.0, 40, 3),
    ] {
        system.menu.add_dish(dish).await?;
    }
    system.register("admin", "admin", Role::Admin).await?;
    system.register("alice", "wonderland", Role::Visitor).await?;

    async {
        let Session::Customer(alice) = system.login("alice", "wonderland").await? else {
            warn!("alice is not a visitor");
            return Ok(());
        };

        alice.start_order();
        alice.add_dish(1).await?;
        alice.add_dish(5).await?;
        if let Some(order) = alice.current_order() {
            let dishes: Vec<&str> = order.dishes.iter().map(|d| d.name.as_str()).collect();
            info!(?dishes, total = order.total(), "Current order");
        }

        let batch = alice.place_order()?;
        info!(batch = %batch.id(), "Waiting for the kitchen");
        let summary = batch.wait().await?;
        info!(
            completed = summary.completed,
            still_pending = alice.current_order().is_some(),
            "Kitchen done"
        );
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(info_span!("scenario"))
    .await?;

    system.shutdown().await?;
    Ok(())
}
