//! Terminal commands.
//!
//! Each line typed at the prompt parses into a [`Command`], and [`run`] applies it to
//! the storefront the same way the matching button or form would.

use super::{Notifier, Storefront, View, render};
use crate::{
    core::{checkout::CheckoutOutcome, session::Registration},
    entities::{NewProduct, ProductId},
    errors::{Error, Result},
};
use std::str::FromStr;

/// Command reference printed by `help`
pub const HELP: &str = "\
Commands:
  list                                  show the visible products
  search [query]                        filter products by name (blank shows all)
  add <id>                              add a product to the cart
  remove <id>                           remove a product from the cart
  qty <id> <n> | inc <id> | dec <id>    change a cart quantity
  cart                                  show the cart
  checkout                              place the order
  login <email> <password>              sign in as a buyer
  register <email> <password> <name...> [seller]
  profile                               show the signed-in account
  sell <price> [old=<price>] [image=<url>] <name...>
  cities [query]                        list cities with pickup points
  points <city>                         list pickup points in a city
  deliver <city> <n>                    choose the n-th pickup point in a city
  help | quit";

/// One parsed prompt line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `help`, `?`
    Help,
    /// `list`
    List,
    /// `search [query]`
    Search(String),
    /// `add <id>`
    Add(ProductId),
    /// `remove <id>`, `rm <id>`
    Remove(ProductId),
    /// `qty <id> <n>`
    Quantity(ProductId, u32),
    /// `inc <id>`
    Increment(ProductId),
    /// `dec <id>`
    Decrement(ProductId),
    /// `cart`
    Cart,
    /// `checkout`
    Checkout,
    /// `login <email> <password>`
    Login {
        /// Typed email, possibly blank
        email: String,
        /// Typed password, possibly blank
        password: String,
    },
    /// `register <email> <password> <name...> [seller]`
    Register(Registration),
    /// `profile`
    Profile,
    /// `sell <price> [old=<price>] [image=<url>] <name...>`
    Sell(NewProduct),
    /// `cities [query]`
    Cities(String),
    /// `points <city>`
    Points(String),
    /// `deliver <city> <n>`, with `n` counted from 1
    Deliver {
        /// City as typed
        city: String,
        /// Position in the city's pickup point list
        point: usize,
    },
    /// `quit`, `exit`
    Quit,
}

/// What the prompt loop should do next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Print the text (possibly empty) and read the next line
    Continue(String),
    /// Leave the loop
    Quit,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();
        let invalid = || Error::UnknownCommand {
            input: line.to_string(),
        };
        let id = |text: &str| text.parse::<ProductId>().map_err(|_| invalid());

        let command = match verb.to_lowercase().as_str() {
            "help" | "?" => Self::Help,
            "list" => Self::List,
            "search" => Self::Search(rest.to_string()),
            "add" => Self::Add(id(rest)?),
            "remove" | "rm" => Self::Remove(id(rest)?),
            "inc" => Self::Increment(id(rest)?),
            "dec" => Self::Decrement(id(rest)?),
            "qty" => {
                let (product, quantity) = rest.split_once(' ').ok_or_else(invalid)?;
                let quantity = quantity.trim().parse().map_err(|_| invalid())?;
                Self::Quantity(id(product)?, quantity)
            }
            "cart" => Self::Cart,
            "checkout" => Self::Checkout,
            "login" => {
                let mut words = rest.split_whitespace();
                Self::Login {
                    email: words.next().unwrap_or_default().to_string(),
                    password: words.next().unwrap_or_default().to_string(),
                }
            }
            "register" => parse_registration(rest).ok_or_else(invalid)?,
            "profile" => Self::Profile,
            "sell" => parse_listing(rest).ok_or_else(invalid)?,
            "cities" => Self::Cities(rest.to_string()),
            "points" => Self::Points(rest.to_string()),
            "deliver" => {
                let (city, point) = rest.rsplit_once(' ').ok_or_else(invalid)?;
                Self::Deliver {
                    city: city.trim().to_string(),
                    point: point.parse().map_err(|_| invalid())?,
                }
            }
            "quit" | "exit" => Self::Quit,
            _ => return Err(invalid()),
        };
        Ok(command)
    }
}

fn parse_registration(rest: &str) -> Option<Command> {
    let mut words: Vec<&str> = rest.split_whitespace().collect();
    let seller = words.last().is_some_and(|word| word.eq_ignore_ascii_case("seller"));
    if seller {
        words.pop();
    }
    let (email, password, name) = match words.as_slice() {
        [email, password, name @ ..] => (email, password, name.join(" ")),
        _ => return None,
    };
    Some(Command::Register(Registration {
        name,
        email: (*email).to_string(),
        password: (*password).to_string(),
        seller,
    }))
}

fn parse_listing(rest: &str) -> Option<Command> {
    let mut words = rest.split_whitespace();
    let price = words.next()?.parse().ok()?;
    let mut listing = NewProduct {
        price,
        ..NewProduct::default()
    };
    let mut name = Vec::new();
    for word in words {
        if let Some(old) = word.strip_prefix("old=") {
            listing.old_price = Some(old.parse().ok()?);
        } else if let Some(image) = word.strip_prefix("image=") {
            listing.image = Some(image.to_string());
        } else {
            name.push(word);
        }
    }
    listing.name = name.join(" ");
    Some(Command::Sell(listing))
}

/// Applies a command to the storefront.
///
/// # Errors
/// Propagates the storefront's validation errors: unknown product, blank form
/// fields, seller gating or a pickup point the directory does not list.
pub fn run<N: Notifier>(store: &mut Storefront<N>, command: Command) -> Result<Flow> {
    let output = match command {
        Command::Help => HELP.to_string(),
        Command::List => render::catalog_view(store.catalog().visible()),
        Command::Search(query) => {
            store.search(&query);
            render::catalog_view(store.catalog().visible())
        }
        Command::Add(id) => {
            let quantity = store.add_to_cart(id)?;
            format!("In cart: {quantity} | Cart items: {}", store.header_badge())
        }
        Command::Remove(id) => {
            store.remove_from_cart(id);
            render::cart_view(store.cart())
        }
        Command::Quantity(id, quantity) => {
            require_in_cart(store.update_quantity(id, quantity), id)?;
            render::cart_view(store.cart())
        }
        Command::Increment(id) => {
            require_in_cart(store.increment_quantity(id).is_some(), id)?;
            render::cart_view(store.cart())
        }
        Command::Decrement(id) => {
            require_in_cart(store.decrement_quantity(id).is_some(), id)?;
            render::cart_view(store.cart())
        }
        Command::Cart => {
            store.open(View::Cart);
            render::cart_view(store.cart())
        }
        Command::Checkout => checkout(store),
        Command::Login { email, password } => {
            store.open(View::Auth);
            let form = &mut store.auth_form_mut().login;
            form.email = email;
            form.password = password;
            store.submit_login()?;
            String::new()
        }
        Command::Register(registration) => {
            store.open(View::Auth);
            store.auth_form_mut().registration = registration;
            store.submit_registration()?;
            String::new()
        }
        Command::Profile => {
            store.open(View::Profile);
            let view = render::profile_view(store.session(), &store.own_products());
            store.close(View::Profile);
            view
        }
        Command::Sell(listing) => {
            let product = store.submit_product(listing)?;
            render::product_card(&product)
        }
        Command::Cities(query) => store.directory().search_cities(&query).join("\n"),
        Command::Points(city) => {
            let points = store.directory().pickup_points(&city);
            if points.is_empty() {
                format!("No pickup points in '{city}'")
            } else {
                numbered(&points)
            }
        }
        Command::Deliver { city, point } => {
            store.open(View::Delivery);
            let address = point
                .checked_sub(1)
                .and_then(|index| store.directory().pickup_points(&city).into_iter().nth(index))
                .ok_or(Error::IncompleteDeliveryPoint)?;
            store.select_delivery_point(&city, &address)?;
            String::new()
        }
        Command::Quit => return Ok(Flow::Quit),
    };
    Ok(Flow::Continue(output))
}

fn checkout<N: Notifier>(store: &mut Storefront<N>) -> String {
    // The cart view only offers checkout when there is something in it
    if store.cart().is_empty() {
        return render::cart_view(store.cart());
    }
    match store.checkout() {
        CheckoutOutcome::NeedsAuthentication => {
            "Use `login` or `register`, then `checkout` again.".to_string()
        }
        CheckoutOutcome::NeedsDeliveryPoint => {
            "Use `cities`, `points` and `deliver`, then `checkout` again.".to_string()
        }
        CheckoutOutcome::Completed(confirmation) => render::confirmation_view(&confirmation),
    }
}

fn require_in_cart(found: bool, id: ProductId) -> Result<()> {
    if found {
        Ok(())
    } else {
        Err(Error::ProductNotFound { id })
    }
}

fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {item}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::storefront;

    fn exec<N: Notifier>(store: &mut Storefront<N>, line: &str) -> Result<String> {
        match run(store, line.parse()?)? {
            Flow::Continue(output) => Ok(output),
            Flow::Quit => Ok("<quit>".to_string()),
        }
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!("list".parse::<Command>().unwrap(), Command::List);
        assert_eq!(
            "add 3".parse::<Command>().unwrap(),
            Command::Add(ProductId::new(3))
        );
        assert_eq!(
            "qty 2 5".parse::<Command>().unwrap(),
            Command::Quantity(ProductId::new(2), 5)
        );
        assert_eq!(
            "search".parse::<Command>().unwrap(),
            Command::Search(String::new())
        );
        assert_eq!(
            "deliver Нижний Новгород 2".parse::<Command>().unwrap(),
            Command::Deliver {
                city: "Нижний Новгород".to_string(),
                point: 2
            }
        );
        assert_eq!("EXIT".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "fly away".parse::<Command>(),
            Err(Error::UnknownCommand { .. })
        ));
        assert!("add x".parse::<Command>().is_err());
        assert!("qty 1".parse::<Command>().is_err());
        assert!("register only@email".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_register_and_sell() {
        let Command::Register(registration) = "register a@b.ru pw Anna Petrova seller"
            .parse::<Command>()
            .unwrap()
        else {
            panic!("expected register");
        };
        assert_eq!(registration.name, "Anna Petrova");
        assert!(registration.seller);

        let Command::Sell(listing) = "sell 1500 old=2000 Зонт складной".parse::<Command>().unwrap()
        else {
            panic!("expected sell");
        };
        assert_eq!(listing.price, 1500.0);
        assert_eq!(listing.old_price, Some(2000.0));
        assert_eq!(listing.name, "Зонт складной");
        assert_eq!(listing.image, None);
    }

    #[test]
    fn test_full_session_through_commands() {
        let mut store = storefront();

        let found = exec(&mut store, "search macbook").unwrap();
        assert!(found.starts_with("Products found: 1"));

        exec(&mut store, "add 3").unwrap();
        exec(&mut store, "add 3").unwrap();
        let cart = exec(&mut store, "cart").unwrap();
        assert!(cart.contains("x2 = 259 980 ₽"));

        let reply = exec(&mut store, "checkout").unwrap();
        assert!(reply.contains("login"));
        assert_eq!(store.cart().item_count(), 2);

        exec(&mut store, "login me@example.com pw").unwrap();
        let reply = exec(&mut store, "checkout").unwrap();
        assert!(reply.contains("deliver"));

        exec(&mut store, "deliver Казань 1").unwrap();
        assert_eq!(
            store.delivery().point().unwrap().address,
            "Казань, ул. Ленина, 10"
        );

        let reply = exec(&mut store, "checkout").unwrap();
        assert!(reply.starts_with("Order of 2 item(s) for 259 980 ₽, pickup at Казань"));
        assert!(store.cart().is_empty());
        assert_eq!(exec(&mut store, "quit").unwrap(), "<quit>");
    }

    #[test]
    fn test_checkout_with_empty_cart_does_nothing() {
        let mut store = storefront();
        let reply = exec(&mut store, "checkout").unwrap();
        assert!(reply.contains("empty"));
        assert!(!store.views().is_open(View::Auth));
        assert!(store.notifier().notices().is_empty());
    }

    #[test]
    fn test_deliver_out_of_range() {
        let mut store = storefront();
        assert!(matches!(
            exec(&mut store, "deliver Казань 9"),
            Err(Error::IncompleteDeliveryPoint)
        ));
        assert!(matches!(
            exec(&mut store, "deliver Казань 0"),
            Err(Error::IncompleteDeliveryPoint)
        ));
        assert!(!store.delivery().is_set());
    }

    #[test]
    fn test_quantity_for_missing_line() {
        let mut store = storefront();
        assert!(matches!(
            exec(&mut store, "inc 1"),
            Err(Error::ProductNotFound { .. })
        ));
    }

    #[test]
    fn test_login_without_password_is_refused() {
        let mut store = storefront();
        assert!(matches!(
            exec(&mut store, "login me@example.com"),
            Err(Error::MissingField { field: "Password" })
        ));
        assert!(!store.session().is_authenticated());
        assert!(matches!(
            exec(&mut store, "register a@b.ru pw"),
            Err(Error::MissingField { field: "Name" })
        ));
    }

    #[test]
    fn test_profile_shows_seller_listings() {
        let mut store = storefront();
        assert_eq!(exec(&mut store, "profile").unwrap(), "Not signed in.");

        exec(&mut store, "register s@shop.ru pw Shop seller").unwrap();
        exec(&mut store, "sell 100 Ручка").unwrap();
        let profile = exec(&mut store, "profile").unwrap();
        assert!(profile.contains("Account: seller"));
        assert!(profile.contains("Your products: 1\n[7] Ручка"));
        assert!(!store.views().is_open(View::Profile));
    }

    #[test]
    fn test_sell_requires_seller() {
        let mut store = storefront();
        assert!(matches!(
            exec(&mut store, "sell 100 Ручка"),
            Err(Error::NotASeller)
        ));
        exec(&mut store, "register s@shop.ru pw Shop seller").unwrap();
        let card = exec(&mut store, "sell 100 Ручка").unwrap();
        assert!(card.starts_with("[7] Ручка | 100 ₽"));
        assert!(card.contains("| s ★5"));
    }
}
