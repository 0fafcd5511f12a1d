//! Golden Fig CLI - Commerce store inspection and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Add two bags of almonds to the guest cart
//! gf-cli cart add almond-250g -q 2
//!
//! # Same, for a signed-in customer
//! gf-cli cart add almond-250g -q 2 -u cust_84h2
//!
//! # Fold the guest cart into a customer cart (what login does)
//! gf-cli cart merge -u cust_84h2
//!
//! # Toggle a wishlist entry, inspect the inbox
//! gf-cli wishlist toggle fig-200g -u cust_84h2
//! gf-cli inbox list -u cust_84h2
//! ```
//!
//! State lives in the file-backed store under `GF_DATA_DIR`
//! (default `.golden-fig`).
//!
//! # Commands
//!
//! - `cart` - List and mutate cart lines
//! - `saved` - List and mutate the save-for-later vault
//! - `wishlist` - List and toggle wishlist entries
//! - `inbox` - Inspect and manage the notification inbox
//! - `coupon` - Apply, show, or remove the cart coupon

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "gf-cli")]
#[command(author, version, about = "Golden Fig CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List and mutate cart lines
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// List and mutate the save-for-later vault
    Saved {
        #[command(subcommand)]
        action: SavedAction,
    },
    /// List and toggle wishlist entries
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Inspect and manage the notification inbox
    Inbox {
        #[command(subcommand)]
        action: InboxAction,
    },
    /// Apply, show, or remove the cart coupon
    Coupon {
        #[command(subcommand)]
        action: CouponAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart
    List {
        /// Customer id (guest when omitted)
        #[arg(short, long)]
        user: Option<String>,
    },
    /// Add an item to the cart
    Add {
        /// Item id
        item: String,

        /// Quantity to add
        #[arg(short, long, default_value = "1")]
        quantity: u32,

        /// Customer id (guest when omitted)
        #[arg(short, long)]
        user: Option<String>,
    },
    /// Remove an item (moves it to the vault for signed-in customers)
    Remove {
        /// Item id
        item: String,

        /// Customer id (guest when omitted)
        #[arg(short, long)]
        user: Option<String>,
    },
    /// Set an item's quantity (0 removes it)
    SetQuantity {
        /// Item id
        item: String,

        /// New quantity
        quantity: i64,

        /// Customer id (guest when omitted)
        #[arg(short, long)]
        user: Option<String>,
    },
    /// Fold the guest cart into a customer cart
    Merge {
        /// Customer id to merge into
        #[arg(short, long)]
        user: String,
    },
    /// Empty the cart (drops the applied coupon too)
    Clear {
        /// Customer id (guest when omitted)
        #[arg(short, long)]
        user: Option<String>,
    },
}

#[derive(Subcommand)]
enum SavedAction {
    /// Show the vault
    List {
        /// Customer id
        #[arg(short, long)]
        user: String,
    },
    /// Save an item for later
    Add {
        /// Item id
        item: String,

        /// Quantity to save
        #[arg(short, long, default_value = "1")]
        quantity: u32,

        /// Customer id
        #[arg(short, long)]
        user: String,
    },
    /// Remove an item from the vault
    Remove {
        /// Item id
        item: String,

        /// Customer id
        #[arg(short, long)]
        user: String,
    },
    /// Move a vault item back into the cart
    Move {
        /// Item id
        item: String,

        /// Customer id
        #[arg(short, long)]
        user: String,
    },
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Show the wishlist
    List {
        /// Customer id
        #[arg(short, long)]
        user: String,
    },
    /// Toggle an item on the wishlist
    Toggle {
        /// Item id
        item: String,

        /// Customer id
        #[arg(short, long)]
        user: String,
    },
}

#[derive(Subcommand)]
enum InboxAction {
    /// Show the inbox, newest first
    List {
        /// Customer id (guest when omitted)
        #[arg(short, long)]
        user: Option<String>,

        /// Only unread entries
        #[arg(long)]
        unread: bool,
    },
    /// Deliver a notification
    Add {
        /// Headline
        #[arg(short, long)]
        title: String,

        /// Message body
        #[arg(short, long)]
        body: String,

        /// Customer id (guest when omitted)
        #[arg(short, long)]
        user: Option<String>,
    },
    /// Mark everything read
    MarkRead {
        /// Customer id (guest when omitted)
        #[arg(short, long)]
        user: Option<String>,
    },
    /// Empty the inbox
    Clear {
        /// Customer id (guest when omitted)
        #[arg(short, long)]
        user: Option<String>,
    },
}

#[derive(Subcommand)]
enum CouponAction {
    /// Show the applied coupon
    Show {
        /// Customer id (guest when omitted)
        #[arg(short, long)]
        user: Option<String>,
    },
    /// Apply a coupon to the cart
    Apply {
        /// Coupon code
        code: String,

        /// Resolved coupon payload as JSON
        #[arg(short, long, default_value = "null")]
        data: String,

        /// Customer id (guest when omitted)
        #[arg(short, long)]
        user: Option<String>,
    },
    /// Remove the applied coupon
    Remove {
        /// Customer id (guest when omitted)
        #[arg(short, long)]
        user: Option<String>,
    },
}

fn main() {
    // Load .env before anything reads configuration
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::List { user } => commands::cart::list(user.as_deref())?,
            CartAction::Add {
                item,
                quantity,
                user,
            } => commands::cart::add(&item, quantity, user.as_deref())?,
            CartAction::Remove { item, user } => commands::cart::remove(&item, user.as_deref())?,
            CartAction::SetQuantity {
                item,
                quantity,
                user,
            } => commands::cart::set_quantity(&item, quantity, user.as_deref())?,
            CartAction::Merge { user } => commands::cart::merge(&user)?,
            CartAction::Clear { user } => commands::cart::clear(user.as_deref())?,
        },
        Commands::Saved { action } => match action {
            SavedAction::List { user } => commands::saved::list(&user)?,
            SavedAction::Add {
                item,
                quantity,
                user,
            } => commands::saved::add(&item, quantity, &user)?,
            SavedAction::Remove { item, user } => commands::saved::remove(&item, &user)?,
            SavedAction::Move { item, user } => commands::saved::move_to_cart(&item, &user)?,
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::List { user } => commands::wishlist::list(&user)?,
            WishlistAction::Toggle { item, user } => commands::wishlist::toggle(&item, &user)?,
        },
        Commands::Inbox { action } => match action {
            InboxAction::List { user, unread } => commands::inbox::list(user.as_deref(), unread)?,
            InboxAction::Add { title, body, user } => {
                commands::inbox::add(&title, &body, user.as_deref())?;
            }
            InboxAction::MarkRead { user } => commands::inbox::mark_read(user.as_deref())?,
            InboxAction::Clear { user } => commands::inbox::clear(user.as_deref())?,
        },
        Commands::Coupon { action } => match action {
            CouponAction::Show { user } => commands::coupon::show(user.as_deref())?,
            CouponAction::Apply { code, data, user } => {
                commands::coupon::apply(&code, &data, user.as_deref())?;
            }
            CouponAction::Remove { user } => commands::coupon::remove(user.as_deref())?,
        },
    }
    Ok(())
}
