use contracts::usecases::u501_browse_catalog::{
    categories, display_name, subcategory_cover, CategoryCard, GridOrigin, Screen,
};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_product::ui::ProductGrid;
use crate::layout::global_context::{use_store, LoadState};

/// Центральная область: состояние загрузки и активный экран навигатора
#[component]
pub fn CatalogArea() -> impl IntoView {
    let ctx = use_store();

    view! {
        <div class="catalog-area">
            {move || match ctx.load_state.get() {
                LoadState::Loading => view! {
                    <div class="catalog-loading">
                        <Spinner />
                        <span>"Cargando productos..."</span>
                    </div>
                }
                .into_any(),
                LoadState::Failed(message) => view! {
                    <p class="catalog-error">{message}</p>
                }
                .into_any(),
                LoadState::Ready => view! { <ScreenView /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ScreenView() -> impl IntoView {
    let ctx = use_store();
    let screen = Memo::new(move |_| ctx.with(|s| s.screen().clone()));

    move || match screen.get() {
        Screen::Categories => view! { <CategoryScreen /> }.into_any(),
        Screen::Subcategories {
            category,
            subcategories,
        } => view! { <SubcategoryScreen category=category subcategories=subcategories /> }
            .into_any(),
        Screen::Grid { origin, .. } => view! { <GridScreen origin=origin /> }.into_any(),
    }
}

#[component]
fn CategoryScreen() -> impl IntoView {
    let ctx = use_store();
    let cards = ctx.store.with_untracked(|s| categories(s.catalog()));

    view! {
        <section id="category-screen" class="category-grid">
            {cards
                .into_iter()
                .map(|card| view! { <CategoryTile card=card /> })
                .collect_view()}
        </section>
    }
}

#[component]
fn CategoryTile(card: CategoryCard) -> impl IntoView {
    let ctx = use_store();
    let name = StoredValue::new(card.name.clone());
    let label = display_name(&card.name);

    view! {
        <article class="category-card">
            <div class="cat-image">
                <img src=card.image alt=label.clone() loading="lazy" />
            </div>
            <h2>{label}</h2>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| {
                    ctx.dispatch(|s| s.select_category(&name.get_value()));
                }
            >
                "Ver productos"
            </Button>
        </article>
    }
}

#[component]
fn SubcategoryScreen(category: String, subcategories: Vec<String>) -> impl IntoView {
    let ctx = use_store();
    let heading = display_name(&category);
    let tiles = ctx.store.with_untracked(|s| {
        subcategories
            .iter()
            .map(|sub| (sub.clone(), subcategory_cover(s.catalog(), &category, sub)))
            .collect::<Vec<_>>()
    });
    let category = StoredValue::new(category);

    view! {
        <section class="subcategory-screen">
            <h2 class="screen-title">{heading}</h2>
            <div id="subcategory-screen" class="category-grid">
                {tiles
                    .into_iter()
                    .map(|(sub, image)| {
                        let label = display_name(&sub);
                        let sub = StoredValue::new(sub);
                        view! {
                            <article class="category-card subcategory-card">
                                <div class="cat-image">
                                    <img src=image alt=label.clone() loading="lazy" />
                                </div>
                                <h2>{label}</h2>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| {
                                        ctx.dispatch(|s| {
                                            s.select_subcategory(&category.get_value(), &sub.get_value())
                                        });
                                    }
                                >
                                    "Ver productos"
                                </Button>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn GridScreen(origin: GridOrigin) -> impl IntoView {
    let ctx = use_store();
    let heading = match &origin {
        GridOrigin::Category(category) => display_name(category),
        GridOrigin::Subcategory {
            category,
            subcategory,
        } => format!("{} / {}", display_name(category), display_name(subcategory)),
        GridOrigin::Search(query) => format!("Resultados para \"{query}\""),
    };
    let products = ctx.store.with_untracked(|s| {
        s.navigator()
            .grid_products(s.catalog())
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });

    view! {
        <section class="grid-screen">
            <h2 class="screen-title">{heading}</h2>
            <ProductGrid products=products />
        </section>
    }
}
