#![allow(clippy::unwrap_used)]

use larder_core::NewRecipe;
use predicates::prelude::*;

use super::test_context::TestContext;

fn recipe(name: &str) -> NewRecipe {
    NewRecipe {
        name: name.to_string(),
        ..Default::default()
    }
}

/// Apple Pie (dessert, 60m), Beef Stew (main, 120m), Garden Salad (favorite, vegetarian, no time)
fn seed(ctx: &TestContext) -> (i64, i64, i64) {
    let pie = ctx.add_recipe(NewRecipe {
        category: Some("dessert".to_string()),
        total_time: Some(60),
        ..recipe("Apple Pie")
    });
    let stew = ctx.add_recipe(NewRecipe {
        category: Some("main".to_string()),
        meal_type: Some("dinner".to_string()),
        total_time: Some(120),
        ..recipe("Beef Stew")
    });
    let salad = ctx.add_recipe(NewRecipe {
        category: Some("salad".to_string()),
        dietary_preference: Some("vegetarian".to_string()),
        is_favorite: true,
        ..recipe("Garden Salad")
    });
    (pie, stew, salad)
}

fn plain_names(output: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(output)
        .lines()
        .filter_map(|line| line.split_once('\t').map(|(_, name)| name.to_string()))
        .collect()
}

#[test]
fn test_recipe_add_simple() {
    let ctx = TestContext::new();

    ctx.cmd()
        .args(["recipe", "add", "Tomato", "Soup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recipe added successfully"));

    let recipes = ctx.recipes();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].name, "Tomato Soup");
    assert!(recipes[0].created_at.is_some());
    assert!(!recipes[0].is_favorite);
}

#[test]
fn test_recipe_add_with_details() {
    let ctx = TestContext::new();

    ctx.cmd()
        .args([
            "recipe",
            "add",
            "--category",
            "pasta",
            "--meal-type",
            "dinner",
            "--diet",
            "vegetarian",
            "--time",
            "25",
            "--favorite",
            "Pesto",
            "Pasta",
        ])
        .assert()
        .success();

    let recipes = ctx.recipes();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].category.as_deref(), Some("pasta"));
    assert_eq!(recipes[0].meal_type.as_deref(), Some("dinner"));
    assert_eq!(recipes[0].dietary_preference.as_deref(), Some("vegetarian"));
    assert_eq!(recipes[0].total_time, Some(25));
    assert!(recipes[0].is_favorite);
}

#[test]
fn test_recipe_add_unknown_group_fails_without_saving() {
    let ctx = TestContext::new();

    ctx.cmd()
        .args(["recipe", "add", "--group", "9", "Lonely", "Loaf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Group 9 not found"));

    ctx.cmd()
        .args(["ls", "--output", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lonely Loaf").not());
}

#[test]
fn test_list_max_time_excludes_slow_and_unknown() {
    let ctx = TestContext::new();
    seed(&ctx);

    let output = ctx
        .cmd()
        .args(["recipe", "list", "--max-time", "90", "--output", "plain"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(plain_names(&output.stdout), vec!["Apple Pie"]);
}

#[test]
fn test_list_search_term() {
    let ctx = TestContext::new();
    seed(&ctx);

    let output = ctx
        .cmd()
        .args(["ls", "beef", "--output", "plain"])
        .output()
        .unwrap();

    assert_eq!(plain_names(&output.stdout), vec!["Beef Stew"]);
}

#[test]
fn test_list_sorting() {
    let ctx = TestContext::new();
    seed(&ctx);

    let output = ctx
        .cmd()
        .args(["ls", "--sort", "alphabetical", "--desc", "--output", "plain"])
        .output()
        .unwrap();
    assert_eq!(
        plain_names(&output.stdout),
        vec!["Garden Salad", "Beef Stew", "Apple Pie"]
    );

    let output = ctx
        .cmd()
        .args(["ls", "--sort", "cook-time", "--output", "plain"])
        .output()
        .unwrap();
    assert_eq!(
        plain_names(&output.stdout),
        vec!["Apple Pie", "Beef Stew", "Garden Salad"]
    );
}

#[test]
fn test_list_quick_filters() {
    let ctx = TestContext::new();
    seed(&ctx);

    let output = ctx
        .cmd()
        .args(["ls", "--quick", "favorites", "--output", "plain"])
        .output()
        .unwrap();
    assert_eq!(plain_names(&output.stdout), vec!["Garden Salad"]);

    let output = ctx
        .cmd()
        .args(["ls", "--quick", "dessert,vegetarian", "--output", "plain"])
        .output()
        .unwrap();
    // category AND dietary: nothing is both a dessert and vegetarian
    assert!(plain_names(&output.stdout).is_empty());
}

#[test]
fn test_list_unknown_quick_filter_fails() {
    let ctx = TestContext::new();

    ctx.cmd()
        .args(["ls", "--quick", "spicy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown quick filter: spicy"));
}

#[test]
fn test_list_pretty_shows_chips() {
    let ctx = TestContext::new();
    seed(&ctx);

    ctx.cmd()
        .args(["ls", "--category", "dessert,main", "--max-time", "200"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Filters: [Dessert] [main] [Under 200m]")
                .and(predicate::str::contains("2 of 3 recipes"))
                .and(predicate::str::contains("Apple Pie")),
        );
}

#[test]
fn test_list_json_output() {
    let ctx = TestContext::new();
    seed(&ctx);

    let output = ctx
        .cmd()
        .args(["ls", "--quick", "under-30", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["recipes"].as_array().unwrap().len(), 0);
    assert_eq!(json["quickFilters"], serde_json::json!(["under-30"]));
    assert_eq!(json["chips"][0]["label"], "Under 30m");
    assert_eq!(json["total"], 3);
}

#[test]
fn test_keep_then_resume_consumes_saved_filters_once() {
    let ctx = TestContext::new();
    seed(&ctx);

    ctx.cmd()
        .args(["ls", "--category", "dessert", "--keep", "--output", "plain"])
        .assert()
        .success();

    ctx.cmd()
        .args(["filters", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Dessert]"));

    let output = ctx
        .cmd()
        .args(["ls", "--resume", "--output", "plain"])
        .output()
        .unwrap();
    assert_eq!(plain_names(&output.stdout), vec!["Apple Pie"]);

    ctx.cmd()
        .args(["filters", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No filters"));

    let output = ctx
        .cmd()
        .args(["ls", "--resume", "--output", "plain"])
        .output()
        .unwrap();
    assert_eq!(plain_names(&output.stdout).len(), 3);
}

#[test]
fn test_resume_with_favorites_override() {
    let ctx = TestContext::new();
    seed(&ctx);

    ctx.cmd()
        .args(["ls", "--keep", "--output", "plain", "--favorites"])
        .assert()
        .success();

    let output = ctx
        .cmd()
        .args(["ls", "--resume", "--output", "plain", "--favorites", "false"])
        .output()
        .unwrap();
    assert_eq!(plain_names(&output.stdout).len(), 3);
}

#[test]
fn test_filters_clear() {
    let ctx = TestContext::new();
    seed(&ctx);

    ctx.cmd()
        .args(["ls", "--quick", "new", "--keep"])
        .assert()
        .success();

    ctx.cmd()
        .args(["filters", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved filters cleared"));

    ctx.cmd()
        .args(["filters", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No filters"));
}

#[test]
fn test_groups_filter_recipes() {
    let ctx = TestContext::new();
    let (pie, _, salad) = seed(&ctx);

    ctx.cmd()
        .args(["group", "add", "Sunday", "Lunch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Group added successfully (1)"));

    for id in [pie, salad] {
        ctx.cmd()
            .args(["group", "assign", "1", &id.to_string()])
            .assert()
            .success();
    }

    ctx.cmd()
        .args(["group", "assign", "1", &pie.to_string(), "--remove"])
        .assert()
        .success();

    ctx.cmd()
        .args(["ls", "--group", "1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("[Sunday Lunch]")
                .and(predicate::str::contains("Garden Salad"))
                .and(predicate::str::contains("Apple Pie").not()),
        );
}

#[test]
fn test_assign_unknown_group_fails() {
    let ctx = TestContext::new();
    let (pie, _, _) = seed(&ctx);

    ctx.cmd()
        .args(["group", "assign", "7", &pie.to_string()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Group 7 not found"));
}

#[test]
fn test_favorite_and_delete() {
    let ctx = TestContext::new();
    let (pie, stew, _) = seed(&ctx);

    ctx.cmd()
        .args(["recipe", "favorite", &pie.to_string()])
        .assert()
        .success();

    ctx.cmd()
        .args(["recipe", "delete", &stew.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Recipe {} deleted", stew)));

    let recipes = ctx.recipes();
    assert_eq!(recipes.len(), 2);
    assert!(recipes.iter().find(|r| r.id == pie).unwrap().is_favorite);

    ctx.cmd()
        .args(["recipe", "delete", &stew.to_string()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
