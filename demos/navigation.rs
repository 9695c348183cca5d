//! Walking through the explorer: overview, genre selection, history

use scatterscope::app::OverviewView;
use scatterscope::{AppConfig, AppContext};
use serde_json::json;

fn main() {
    println!("=== Genre Explorer Navigation ===\n");

    let ctx = AppContext::new(AppConfig::default())
        .expect("default routes include `/`")
        .with_dataset(vec![
            json!({"genre": "classical", "hours": 4, "anxiety": 2}),
            json!({"genre": "rock", "hours": 2, "anxiety": 6}),
            json!({"genre": "classical", "hours": 1, "anxiety": 3}),
            json!({"genre": "hip hop", "hours": 5, "anxiety": 7}),
        ]);

    // Log every route change, the way a view would re-render
    ctx.router().subscribe(|route| {
        println!("   [Router] {} -> {} view", route.path, route.view);
    });

    println!("1. Starting view:");
    println!("{}\n", ctx.render());

    println!("2. Selecting `classical` from the overview");
    OverviewView::select(&ctx, "classical").expect("genre route exists");
    println!("{}\n", ctx.render());

    println!("3. Opening `hip hop` directly by path");
    ctx.navigate("/details/hip hop").expect("detail route matches");
    println!("   (detail store still holds the last selection)");
    println!("{}\n", ctx.render());

    println!("4. Going back twice");
    ctx.router().back();
    ctx.router().back();
    println!("{}\n", ctx.render());

    println!("5. Unknown path");
    match ctx.navigate("/charts") {
        Ok(_) => println!("   unexpected match"),
        Err(err) => println!("   {err}"),
    }

    println!("\n✓ Navigation complete!");
}
