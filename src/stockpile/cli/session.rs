use super::prompt::Prompter;
use super::render::{
    print_header, print_messages, print_product_list, print_products, print_welcome,
    UNKNOWN_OPERATION,
};
use log::debug;
use std::io::{BufRead, Write};
use stockpile::api::{CmdMessage, InventoryApi};
use stockpile::error::{InventoryError, Result};
use stockpile::model::{ProductDraft, SlotField};
use stockpile::store::DataStore;

const COMMAND_PROMPT: &str =
    "Please select an operation, or 'DONE' if there is no operation required: ";
const ID_PROMPT: &str = "Please input a product identifier: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    List,
    Show,
    Create,
    Update,
    Destroy,
    Reset,
    Done,
    Unknown(String),
}

impl Operation {
    /// Matches a command token regardless of case: `list`, `LIST` and `List` are the same.
    pub fn parse(input: &str) -> Self {
        match title_case(input.trim()).as_str() {
            "List" => Operation::List,
            "Show" => Operation::Show,
            "Create" => Operation::Create,
            "Update" => Operation::Update,
            "Destroy" => Operation::Destroy,
            "Reset" => Operation::Reset,
            "Done" => Operation::Done,
            _ => Operation::Unknown(input.to_string()),
        }
    }
}

fn title_case(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// How a session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Products were saved on the way out
    Done,
    /// Live products were replaced by the defaults; the in-memory list was dropped
    Reset,
}

pub struct Session<S: DataStore, R, W> {
    api: InventoryApi<S>,
    prompter: Prompter<R, W>,
}

impl<S: DataStore, R: BufRead, W: Write> Session<S, R, W> {
    pub fn new(api: InventoryApi<S>, input: R, output: W) -> Self {
        Self {
            api,
            prompter: Prompter::new(input, output),
        }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (InventoryApi<S>, W) {
        (self.api, self.prompter.into_output())
    }

    pub fn run(&mut self) -> Result<SessionEnd> {
        let username = self
            .prompter
            .ask_optional("Please enter your username: ")?
            .unwrap_or_default();
        print_welcome(self.prompter.output(), &username, self.api.products().len())?;

        loop {
            let operation = match self.prompter.ask_optional(COMMAND_PROMPT)? {
                Some(line) => Operation::parse(&line),
                None => Operation::Done,
            };
            debug!("Dispatching {:?}", operation);

            let outcome = match operation {
                Operation::Done => return self.finish(),
                Operation::Reset => return self.reset(),
                Operation::List => self.list(),
                Operation::Show => self.show(),
                Operation::Create => self.create(),
                Operation::Update => self.update(),
                Operation::Destroy => self.destroy(),
                Operation::Unknown(token) => {
                    debug!("Unrecognized operation {:?}", token);
                    self.prompter.say_error(UNKNOWN_OPERATION)?;
                    Ok(())
                }
            };

            match outcome {
                Err(InventoryError::ProductNotFound(id)) => {
                    let message = CmdMessage::error(format!("Error: no product with id '{}'", id));
                    print_messages(self.prompter.output(), &[message])?;
                }
                other => other?,
            }
        }
    }

    fn finish(&mut self) -> Result<SessionEnd> {
        let result = self.api.save()?;
        print_messages(self.prompter.output(), &result.messages)?;
        Ok(SessionEnd::Done)
    }

    fn reset(&mut self) -> Result<SessionEnd> {
        let result = self.api.reset()?;
        print_messages(self.prompter.output(), &result.messages)?;
        Ok(SessionEnd::Reset)
    }

    fn list(&mut self) -> Result<()> {
        let result = self.api.list_products()?;
        print_product_list(self.prompter.output(), &result.listed_products)?;
        Ok(())
    }

    fn show(&mut self) -> Result<()> {
        let id = self.prompter.ask(ID_PROMPT)?;
        let result = self.api.show_product(&id)?;
        let out = self.prompter.output();
        print_header(out, "SHOWING A PRODUCT")?;
        print_products(out, &result.listed_products)?;
        Ok(())
    }

    fn create(&mut self) -> Result<()> {
        let next = self.api.next_id()?;
        debug!("Next product id will be {}", next);
        let draft = self.ask_draft("Please enter product name: ")?;
        let result = self.api.create_product(draft)?;

        let out = self.prompter.output();
        print_header(out, "CREATING A PRODUCT")?;
        print_products(out, &result.affected_products)?;
        print_messages(out, &result.messages)?;
        Ok(())
    }

    fn update(&mut self) -> Result<()> {
        let id = self.prompter.ask(ID_PROMPT)?;
        let current = self.api.show_product(&id)?;
        print_products(self.prompter.output(), &current.listed_products)?;

        let api = &self.api;
        let new_id = self
            .prompter
            .ask_new_id(|candidate| api.check_new_id(&id, candidate))?;
        let draft = self.ask_draft("Please enter new product name: ")?;
        let result = self.api.update_product(&id, &new_id, draft)?;

        let out = self.prompter.output();
        print_header(out, "UPDATING A PRODUCT")?;
        print_products(out, &result.affected_products)?;
        print_messages(out, &result.messages)?;
        Ok(())
    }

    fn destroy(&mut self) -> Result<()> {
        let id = self.prompter.ask(ID_PROMPT)?;
        let result = self.api.destroy_product(&id)?;

        let out = self.prompter.output();
        print_header(out, "DESTROYING A PRODUCT")?;
        print_products(out, &result.affected_products)?;
        print_messages(out, &result.messages)?;
        Ok(())
    }

    fn ask_draft(&mut self, name_prompt: &str) -> Result<ProductDraft> {
        let name = self.prompter.ask(name_prompt)?;
        let aisle = self.prompter.ask_slot(SlotField::Aisle)?;
        let department = self.prompter.ask_slot(SlotField::Department)?;
        let price = self.prompter.ask_price()?;
        Ok(ProductDraft::new(name, aisle, department, price))
    }
}
