use colored::Colorize;
use std::io::{self, Write};
use stockpile::api::{CmdMessage, MessageLevel};
use stockpile::model::Product;

const RULE: &str = "-----------------------------------";

pub(super) const UNKNOWN_OPERATION: &str =
    "Unrecognized Operation. Please choose one of: 'List', 'Show', 'Create', 'Update', 'Destroy', 'Reset' or 'Done'";

pub(super) fn print_welcome<W: Write>(out: &mut W, username: &str, count: usize) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "{}", "INVENTORY MANAGEMENT APPLICATION".bold())?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Welcome {}!", username)?;
    writeln!(out, "There are {} products in the database.", count)?;
    writeln!(out, "    operation | description")?;
    writeln!(out, "    --------- | ------------------")?;
    writeln!(out, "    'List'    | Display a list of product identifiers and names.")?;
    writeln!(out, "    'Show'    | Show information about a product.")?;
    writeln!(out, "    'Create'  | Add a new product.")?;
    writeln!(out, "    'Update'  | Edit an existing product.")?;
    writeln!(out, "    'Destroy' | Delete an existing product.")?;
    writeln!(out, "    'Reset'   | Reset to the original csv file.")?;
    writeln!(out, "    'Done'    | Save and exit.")?;
    Ok(())
}

pub(super) fn print_header<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "{}", title.bold())?;
    writeln!(out, "{}", RULE)
}

pub(super) fn print_product_list<W: Write>(out: &mut W, products: &[Product]) -> io::Result<()> {
    print_header(out, &format!("LISTING {} PRODUCTS", products.len()))?;
    for product in products {
        writeln!(out, "#{}: {}", product.id, product.name)?;
    }
    Ok(())
}

pub(super) fn print_products<W: Write>(out: &mut W, products: &[Product]) -> io::Result<()> {
    for product in products {
        writeln!(out, "{}", product)?;
    }
    Ok(())
}

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}
