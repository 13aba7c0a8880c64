// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};

use crate::command::InvocationArgs;
use crate::errors::PipeError;
use crate::handler::StreamHandler;
use crate::stream::Streamable;

/// Pipe a raw input stream through a handler into a raw output stream.
///
/// The input is wrapped lazily — the handler pulls bytes only as it
/// consumes them — and the result is copied out with `tokio::io::copy`,
/// so backpressure holds end to end: output writing is throttled by the
/// sink's readiness and input reading by the handler's demand. Nothing is
/// ever written to the output if the handler fails. A failure mid-copy is
/// reported even though already-flushed bytes cannot be rolled back.
///
/// Returns the number of bytes copied to the output.
pub async fn pipe_through_handler<I, O>(
    handler: &dyn StreamHandler,
    args: &InvocationArgs,
    input: I,
    mut output: O,
) -> Result<u64, PipeError>
where
    I: AsyncRead + Send + Unpin + 'static,
    O: AsyncWrite + Send + Unpin,
{
    let input_streamable = Streamable::from_reader(Box::new(input));

    let result = handler
        .handle(args, input_streamable)
        .await
        .map_err(|source| PipeError::Handler { source })?;

    let mut reader = result.into_reader();
    let bytes_copied = tokio::io::copy(&mut reader, &mut output).await?;
    output.flush().await?;

    Ok(bytes_copied)
}
