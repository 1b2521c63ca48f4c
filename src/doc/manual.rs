/*!
# User Manual for concat

Begin by opening a terminal and running the executable. There is no
banner and no prompt decoration; concat is waiting for a line of input
as soon as it starts. Type CTRL-D to exit.

concat reads one line at a time and evaluates it in postfix order:
numbers first, then the operator that combines them. Every number you
type is pushed onto a stack. For this manual, lines you type are
marked with a "`>`".

<pre><code>&nbsp;> 2 3 + .
&nbsp;  5
</code></pre>

`2` and `3` go onto the stack. `+` takes both off and pushes `5`.
`.` (dot) takes the top of the stack off and prints it.

The four operators are `+`, `-`, `*`, and `/`. Each pops two values:
the top of the stack is the right-hand side, the value under it the
left-hand side. Division is integer division and dividing by zero is
an error.

<pre><code>&nbsp;> 10 2 - .
&nbsp;  8
&nbsp;> 7 2 / .
&nbsp;  3
</code></pre>

`.S` prints the whole stack without disturbing it, newest value
first. Each line shows the slot number, the kind of thing stored
there, and its text.

<pre><code>&nbsp;> 1 2 3 .S
&nbsp;  3 INTEGER 3
&nbsp;  2 INTEGER 2
&nbsp;  1 INTEGER 1
</code></pre>

The stack holds values across lines, so you can build up a
calculation gradually.

<pre><code>&nbsp;> 100 7
&nbsp;> 7 * *
&nbsp;> .
&nbsp;  4900
</code></pre>

Anything concat does not recognise is reported and skipped; the rest
of the line still runs.

<pre><code>&nbsp;> what 5 5 + .
&nbsp;  Unrecognised input what has been ignored
&nbsp;  10
</code></pre>

Structural mistakes are not skippable. Printing or operating on an
empty stack, dividing by zero, overflowing 64-bit arithmetic, or
filling all 1000 stack slots ends the session with a non-zero exit
status.

<pre><code>&nbsp;> .
&nbsp;  ?STACK UNDERFLOW
</code></pre>

CTRL-C abandons whatever remains of the line being evaluated. The
stack is kept; an interrupt is not an error.

*/
