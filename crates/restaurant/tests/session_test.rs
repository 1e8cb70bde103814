use restaurant::account_actor::AccountError;
use restaurant::config::{KitchenConfig, PrepDelay};
use restaurant::fulfillment::FulfillmentError;
use restaurant::lifecycle::RestaurantSystem;
use restaurant::menu_actor::CatalogError;
use restaurant::model::{Dish, Role};
use restaurant::session::{AdminSession, CustomerSession, Session, SessionError};
use std::time::Duration;

fn carbonara() -> Dish {
    Dish::new("Carbonara", 499.0, 60, 3)
}

fn borscht() -> Dish {
    Dish::new("Borscht", 200.0, 40, 3)
}

fn quick_kitchen() -> KitchenConfig {
    KitchenConfig::default().with_prep_delay(PrepDelay::PerPrepMinute(Duration::from_millis(1)))
}

/// A system with a two-dish menu, one admin and one visitor.
async fn open_restaurant() -> RestaurantSystem {
    open_restaurant_with(quick_kitchen()).await
}

async fn open_restaurant_with(config: KitchenConfig) -> RestaurantSystem {
    let system = RestaurantSystem::new(config);
    system.menu.add_dish(carbonara()).await.unwrap();
    system.menu.add_dish(borscht()).await.unwrap();
    system.register("admin", "secret", Role::Admin).await.unwrap();
    system.register("alice", "wonderland", Role::Visitor).await.unwrap();
    system
}

async fn customer<'a>(system: &'a RestaurantSystem, name: &str, password: &str) -> CustomerSession<'a> {
    match system.login(name, password).await {
        Ok(Session::Customer(session)) => session,
        Ok(Session::Admin(_)) => panic!("{name} logged in as admin"),
        Err(e) => panic!("login failed: {e}"),
    }
}

async fn admin(system: &RestaurantSystem) -> AdminSession<'_> {
    match system.login("admin", "secret").await {
        Ok(Session::Admin(session)) => session,
        Ok(Session::Customer(_)) => panic!("admin logged in as visitor"),
        Err(e) => panic!("login failed: {e}"),
    }
}

#[tokio::test]
async fn test_login_requires_matching_password() {
    let system = open_restaurant().await;

    assert!(matches!(
        system.login("alice", "wrong").await,
        Err(SessionError::InvalidCredentials)
    ));
    assert!(matches!(
        system.login("nobody", "wonderland").await,
        Err(SessionError::InvalidCredentials)
    ));
    let session = system.login("alice", "wonderland").await.unwrap();
    assert_eq!(session.username().as_str(), "alice");
    assert!(matches!(session, Session::Customer(_)));
    drop(session);

    assert_eq!(system.accounts.role("admin").await, Ok(Some(Role::Admin)));
    assert_eq!(system.accounts.role("nobody").await, Ok(None));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_duplicate_registration_is_refused() {
    let system = open_restaurant().await;

    let err = system
        .register("alice", "other", Role::Admin)
        .await
        .unwrap_err();
    assert!(matches!(err, AccountError::AlreadyExists(_)));

    // The first registration still stands.
    let session = customer(&system, "alice", "wonderland").await;
    drop(session);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_admin_edits_menu() {
    let system = open_restaurant().await;
    let admin = admin(&system).await;

    admin.add_dish(Dish::new("Cheeseburger", 199.0, 20, 3)).await.unwrap();
    admin.add_dish(carbonara()).await.unwrap();
    assert_eq!(
        admin.menu().await.unwrap(),
        vec![carbonara(), borscht(), Dish::new("Cheeseburger", 199.0, 20, 3), carbonara()]
    );

    // Removing the last Carbonara by position removes the first equal entry.
    assert_eq!(admin.remove_dish(4).await.unwrap(), carbonara());
    assert_eq!(
        admin.menu().await.unwrap(),
        vec![borscht(), Dish::new("Cheeseburger", 199.0, 20, 3), carbonara()]
    );

    assert_eq!(
        admin.remove_dish(9).await,
        Err(SessionError::InvalidSelection(9))
    );
    assert!(matches!(
        admin.add_dish(Dish::new("Soup", -1.0, 10, 3)).await,
        Err(SessionError::Catalog(CatalogError::InvalidDish(_)))
    ));
    assert!(matches!(
        admin.add_dish(Dish::new("Soup", 100.0, 10, 9)).await,
        Err(SessionError::Catalog(CatalogError::InvalidDish(_)))
    ));

    drop(admin);
    system.shutdown().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_customer_orders_and_kitchen_clears_it() {
    let system = open_restaurant().await;
    let alice = customer(&system, "alice", "wonderland").await;

    assert_eq!(alice.menu().await.unwrap(), vec![carbonara(), borscht()]);
    alice.start_order();
    assert_eq!(alice.add_dish(1).await.unwrap(), carbonara());
    assert_eq!(alice.add_dish(2).await.unwrap(), borscht());
    assert_eq!(
        alice.current_order().unwrap().dishes,
        vec![carbonara(), borscht()]
    );

    let batch = alice.place_order().unwrap();
    assert_eq!(batch.dispatched(), &[alice.customer().clone()]);
    let summary = batch.wait().await.unwrap();
    assert_eq!(summary.completed, 1);
    assert!(alice.current_order().is_none());

    drop(alice);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_customer_edits_order_by_position() {
    let system = open_restaurant().await;
    let alice = customer(&system, "alice", "wonderland").await;

    alice.start_order();
    alice.add_dish(2).await.unwrap();
    alice.add_dish(1).await.unwrap();
    alice.add_dish(2).await.unwrap();

    assert_eq!(alice.remove_dish(1).unwrap(), borscht());
    assert_eq!(
        alice.current_order().unwrap().dishes,
        vec![carbonara(), borscht()]
    );
    assert_eq!(alice.remove_dish(3), Err(SessionError::InvalidSelection(3)));

    alice.cancel_order().unwrap();
    assert_eq!(alice.cancel_order(), Err(SessionError::NoActiveOrder));

    drop(alice);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_customer_errors() {
    let system = open_restaurant().await;
    let alice = customer(&system, "alice", "wonderland").await;

    assert_eq!(alice.add_dish(1).await, Err(SessionError::NoActiveOrder));
    assert_eq!(alice.remove_dish(1), Err(SessionError::NoActiveOrder));
    assert!(matches!(alice.place_order(), Err(SessionError::NoActiveOrder)));

    alice.start_order();
    assert_eq!(alice.add_dish(0).await, Err(SessionError::InvalidSelection(0)));
    assert_eq!(alice.add_dish(3).await, Err(SessionError::InvalidSelection(3)));
    assert!(matches!(alice.place_order(), Err(SessionError::EmptyOrder)));
    assert!(alice.current_order().unwrap().is_empty());

    drop(alice);
    system.shutdown().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_customers_have_separate_orders() {
    let system = open_restaurant().await;
    system.register("bob", "builder", Role::Visitor).await.unwrap();
    let alice = customer(&system, "alice", "wonderland").await;
    let bob = customer(&system, "bob", "builder").await;

    alice.start_order();
    alice.add_dish(1).await.unwrap();
    bob.start_order();
    bob.add_dish(2).await.unwrap();

    assert_eq!(alice.current_order().unwrap().dishes, vec![carbonara()]);
    assert_eq!(bob.current_order().unwrap().dishes, vec![borscht()]);
    assert_eq!(system.orders.len(), 2);

    // Placing one order sends every pending order to the kitchen.
    let batch = bob.place_order().unwrap();
    assert_eq!(batch.dispatched().len(), 2);
    batch.wait().await.unwrap();
    assert!(system.orders.is_empty());

    drop((alice, bob));
    system.shutdown().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_place_order_fails_when_kitchen_queue_is_full() {
    let system = open_restaurant_with(quick_kitchen().with_queue_capacity(1)).await;
    system.register("bob", "builder", Role::Visitor).await.unwrap();
    let bob = customer(&system, "bob", "builder").await;
    let alice = customer(&system, "alice", "wonderland").await;

    // Bob's order is older, so it takes the only queue slot.
    bob.start_order();
    bob.add_dish(1).await.unwrap();
    alice.start_order();
    alice.add_dish(2).await.unwrap();

    assert_eq!(
        alice.place_order().map(|_| ()),
        Err(SessionError::Fulfillment(FulfillmentError::QueueFull {
            customer: alice.customer().clone()
        }))
    );
    assert_eq!(alice.current_order().unwrap().dishes, vec![borscht()]);

    // Bob's order is in the kitchen or done by now, so the slot is free.
    let batch = alice.place_order().unwrap();
    assert_eq!(batch.dispatched(), &[alice.customer().clone()]);
    batch.wait().await.unwrap();
    assert!(alice.current_order().is_none());

    drop((alice, bob));
    system.shutdown().await.unwrap();
}
