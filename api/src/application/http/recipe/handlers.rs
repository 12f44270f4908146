pub mod suggest_recipe;
