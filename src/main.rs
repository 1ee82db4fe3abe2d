use std::env;

use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use foodtruck_pos::config::ServerConfig;
use foodtruck_pos::db::establish_connection_pool;
use foodtruck_pos::repository::DieselRepository;
use foodtruck_pos::routes::auth::{
    add_staff, customer_login, customer_register, list_staff, staff_login,
};
use foodtruck_pos::routes::checkout::create_order;
use foodtruck_pos::routes::inventory::{
    add_inventory_item, delete_inventory_item, edit_inventory_item, get_inventory_item,
    list_inventory,
};
use foodtruck_pos::routes::locations::{
    add_active_location, add_location, add_shift, delete_active_location, delete_shift,
    list_active_locations, list_locations, list_shifts, todays_location,
};
use foodtruck_pos::routes::menu::{
    add_ingredient, add_menu_item, delete_menu_item, edit_menu_item, get_menu_item,
    list_ingredients, list_menu_items,
};
use foodtruck_pos::routes::notifications::{list_notifications, mark_all_read, mark_read};
use foodtruck_pos::routes::orders::{get_order, list_orders, update_item_status};
use foodtruck_pos::routes::reports::{employee_performance, item_popularity, location_profit};
use foodtruck_pos::routes::utilities::{add_utility_bill, delete_utility_bill, list_utility_bills};
use foodtruck_pos::routes::welcome::welcome_data;

/// Sales tax applied at checkout when TAX_RATE_BP is not set, in basis points.
const DEFAULT_TAX_RATE_BP: i64 = 825;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("app.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());
    let uploads_dir = env::var("UPLOADS_DIR").unwrap_or("./uploads".to_string());

    let tax_rate_bp = env::var("TAX_RATE_BP")
        .ok()
        .and_then(|value| value.parse::<i64>().ok())
        .unwrap_or(DEFAULT_TAX_RATE_BP);
    let config = ServerConfig { tax_rate_bp };

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/uploads", uploads_dir.clone()))
            .service(
                web::scope("/api")
                    .service(customer_register)
                    .service(customer_login)
                    .service(staff_login)
                    .service(list_staff)
                    .service(add_staff)
                    .service(welcome_data)
                    .service(list_menu_items)
                    .service(get_menu_item)
                    .service(add_menu_item)
                    .service(edit_menu_item)
                    .service(delete_menu_item)
                    .service(list_ingredients)
                    .service(add_ingredient)
                    .service(create_order)
                    .service(list_orders)
                    .service(get_order)
                    .service(update_item_status)
                    .service(list_locations)
                    .service(add_location)
                    .service(todays_location)
                    .service(list_active_locations)
                    .service(add_active_location)
                    .service(delete_active_location)
                    .service(list_shifts)
                    .service(add_shift)
                    .service(delete_shift)
                    .service(list_inventory)
                    .service(get_inventory_item)
                    .service(add_inventory_item)
                    .service(edit_inventory_item)
                    .service(delete_inventory_item)
                    .service(list_utility_bills)
                    .service(add_utility_bill)
                    .service(delete_utility_bill)
                    .service(list_notifications)
                    .service(mark_read)
                    .service(mark_all_read)
                    .service(location_profit)
                    .service(item_popularity)
                    .service(employee_performance),
            )
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(config.clone()))
    })
    .bind((address, port))?
    .run()
    .await
}
