use std::convert::Infallible;

use clap::Args;

use crate::cli::op::{Op, OpContext};

#[derive(Args, Debug, Clone)]
pub struct Exit {}

impl Op for Exit {
    type Error = Infallible;
    type Output = String;

    fn execute(&self, ctx: &mut OpContext<'_>) -> Result<Self::Output, Self::Error> {
        ctx.request_exit();
        Ok(String::new())
    }
}
