use std::sync::Arc;

use anyhow::Context;

use pyroshop_catalog::{CatalogQuery, SortOrder};
use pyroshop_checkout::{AnonymousIdentity, PaymentDetails};
use pyroshop_core::{Entity, ProductId};
use pyroshop_storefront::{CartBadge, CartPage, Storefront, StorefrontConfig, View};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = StorefrontConfig::from_env()?;
    pyroshop_observability::init_with(config.log_format);

    let mut shop = Storefront::from_config(&config, Arc::new(AnonymousIdentity));
    let mut badge = CartBadge::new(shop.cart());
    let mut page = CartPage::new(shop.cart());

    println!("Catalog (price: low to high)");
    for product in shop.browse(&CatalogQuery::default().sorted(SortOrder::PriceLow)) {
        println!(
            "  [{}] {:<20} {:>6}  {} in stock",
            product.id(),
            product.name(),
            product.price().to_string(),
            product.stock()
        );
    }

    for raw in ["1", "2", "1"] {
        let id = ProductId::new(raw)?;
        shop.add_to_cart(&id)
            .with_context(|| format!("failed to add product {raw}"))?;
    }

    badge.refresh();
    page.refresh();
    println!("\n{}\n{}", badge.render(), page.render());

    let mut shipping = shop.shipping_form();
    shipping.full_name = "Demo Customer".into();
    shipping.email = "demo@pyroshop.example".into();
    shipping.phone = "9800000000".into();
    shipping.address = "1 Festival Street".into();
    shipping.city = "Sivakasi".into();
    shipping.state = "Tamil Nadu".into();
    shipping.pincode = "626123".into();

    let payment = PaymentDetails {
        card_name: "Demo Customer".into(),
        card_number: "4111 1111 1111 1111".into(),
        expiry_date: "12/30".into(),
        cvv: "123".into(),
    };

    let confirmation = shop
        .place_order(shipping, &payment)
        .await
        .context("checkout failed")?;

    println!(
        "Order {} confirmed: {} items, total {} paid with {}",
        confirmation.reference(),
        confirmation.summary.item_count,
        confirmation.summary.total,
        confirmation.payment_method
    );

    badge.refresh();
    println!("{}", badge.render());
    Ok(())
}
